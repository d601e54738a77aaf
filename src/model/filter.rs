//! 联系人过滤条件

use crate::error::{check_argument, Result};
use crate::matcher::{check_tutorial_group, Matcher};
use crate::model::person::Person;
use crate::model::registry::TutorialTagSource;
use crate::string_util::{check_single_word, contains_subword};

/// 联系人过滤条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonFilter {
    /// 显示全部
    ShowAll,
    /// 姓名中任一词包含任一关键词（子词匹配）
    NameContainsKeywords(Vec<String>),
    /// 任一标签包含任一关键词（按注册表决定子词/整词）
    TagContainsKeywords(Vec<String>),
    /// 拥有可用的指定辅导组标签
    TutorialGroup(String),
}

impl PersonFilter {
    /// 校验参数，安装到模型前调用
    pub fn validate(&self) -> Result<()> {
        match self {
            PersonFilter::ShowAll => Ok(()),
            PersonFilter::NameContainsKeywords(keywords) => {
                keywords.iter().try_for_each(|k| check_single_word(k))
            }
            PersonFilter::TagContainsKeywords(keywords) => keywords.iter().try_for_each(|k| {
                check_argument(!k.trim().is_empty(), "Word parameter cannot be empty")
            }),
            PersonFilter::TutorialGroup(group) => check_tutorial_group(group),
        }
    }

    /// 判断联系人是否满足条件
    pub fn test<S>(&self, person: &Person, matcher: &Matcher<'_, S>) -> Result<bool>
    where
        S: TutorialTagSource + ?Sized,
    {
        match self {
            PersonFilter::ShowAll => Ok(true),
            PersonFilter::NameContainsKeywords(keywords) => {
                for keyword in keywords {
                    if contains_subword(person.name(), keyword)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            PersonFilter::TagContainsKeywords(keywords) => {
                for keyword in keywords {
                    for tag in person.tags() {
                        if matcher.tag_contains_word(tag, keyword)? {
                            return Ok(true);
                        }
                    }
                }
                Ok(false)
            }
            PersonFilter::TutorialGroup(group) => {
                for tag in person.tags() {
                    if matcher.contains_tutorial_group(tag, group)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}
