//! 标签匹配器
//!
//! 根据当前辅导组注册表决定匹配策略：
//! 词是某个辅导组名的子串时做子词匹配，否则做整词匹配。
//! 注册表按顺序扫描，第一个命中的辅导组决定结果。

use crate::error::{check_argument, Result};
use crate::model::registry::TutorialTagSource;
use crate::model::tag::{Tag, TagStatus};
use crate::string_util::eq_ignore_case;

/// 校验辅导组参数：非空且为单个词
pub fn check_tutorial_group(tutorial_group: &str) -> Result<()> {
    check_argument(
        !tutorial_group.is_empty(),
        "Tutorial group parameter cannot be empty",
    )?;
    check_argument(
        !tutorial_group.chars().any(char::is_whitespace),
        "Only use one word for tutorial group parameter",
    )
}

/// 标签匹配器（注册表显式传入）
pub struct Matcher<'a, S: TutorialTagSource + ?Sized> {
    registry: &'a S,
}

impl<'a, S: TutorialTagSource + ?Sized> Matcher<'a, S> {
    pub fn new(registry: &'a S) -> Self {
        Self { registry }
    }

    /// 判断 `tag` 是否包含 `word`
    ///
    /// 忽略大小写。若 `word` 是某个有效辅导组名的子串，
    /// 则仅当 `tag` 为辅导组标签且其名称包含 `word` 时匹配；
    /// 否则要求标签名与 `word` 完全相同。
    ///
    /// # Errors
    /// `word` 去除首尾空白后为空时返回 InvalidArgument；注册表不可用时透传其错误
    pub fn tag_contains_word(&self, tag: &Tag, word: &str) -> Result<bool> {
        let tag_name = tag.name().to_lowercase();
        let prepped_word = word.trim().to_lowercase();
        check_argument(!prepped_word.is_empty(), "Word parameter cannot be empty")?;

        self.registry.with_tutorial_tags(|tutorials| {
            for tutorial in tutorials {
                if tutorial.name().to_lowercase().contains(&prepped_word) {
                    let matched = tag_name.contains(&prepped_word) && tag.is_tutorial();
                    tracing::debug!(
                        "标签匹配: '{}' 命中辅导组 {}，子词匹配 {} => {}",
                        prepped_word,
                        tutorial,
                        tag,
                        matched
                    );
                    return matched;
                }
            }
            tag_name == prepped_word
        })
    }

    /// 判断 `tag` 是否就是可用的辅导组 `tutorial_group`
    ///
    /// 忽略大小写，整词匹配。要求注册表中存在该辅导组、
    /// 标签名与其相同且标签状态为 Available。
    ///
    /// # Errors
    /// `tutorial_group` 为空或包含空白时返回 InvalidArgument
    pub fn contains_tutorial_group(&self, tag: &Tag, tutorial_group: &str) -> Result<bool> {
        check_tutorial_group(tutorial_group)?;

        self.registry.with_tutorial_tags(|tutorials| {
            tutorials
                .iter()
                .find(|tutorial| eq_ignore_case(tutorial.name(), tutorial_group))
                .map(|_| {
                    eq_ignore_case(tag.name(), tutorial_group)
                        && tag.status() == TagStatus::Available
                })
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::registry::RegistryAccessor;
    use crate::model::tag::{create_tag, TutorialTag};

    fn registry(names: &[&str]) -> Vec<TutorialTag> {
        names.iter().map(|n| TutorialTag::new(n).unwrap()).collect()
    }

    #[test]
    fn test_tag_contains_word_subword_for_tutorial() {
        let tutorials = registry(&["T05"]);
        let matcher = Matcher::new(&tutorials);

        let tutorial = create_tag("T05x", TagStatus::Available).unwrap();
        assert!(matcher.tag_contains_word(&tutorial, "t05").unwrap());
        assert!(matcher.tag_contains_word(&tutorial, "  T05  ").unwrap());

        let assignment = create_tag("T05x", TagStatus::CompleteGood).unwrap();
        assert!(!matcher.tag_contains_word(&assignment, "t05").unwrap());
    }

    #[test]
    fn test_tag_contains_word_falls_back_to_exact() {
        let tutorials = registry(&["T05"]);
        let matcher = Matcher::new(&tutorials);

        let assignment = create_tag("Lab1", TagStatus::IncompleteBad).unwrap();
        assert!(matcher.tag_contains_word(&assignment, "LAB1").unwrap());
        assert!(!matcher.tag_contains_word(&assignment, "lab").unwrap());
    }

    #[test]
    fn test_tag_contains_word_first_registry_hit_decides() {
        // "0" 同时是 "T05" 和 "A0" 的子串，以注册表中第一个为准
        let tutorials = registry(&["T05", "A0"]);
        let matcher = Matcher::new(&tutorials);

        let attendance = create_tag("0", TagStatus::Present).unwrap();
        // 子词策略下非辅导组标签一律不匹配，即使名称完全相同
        assert!(!matcher.tag_contains_word(&attendance, "0").unwrap());

        let tutorial = create_tag("A0", TagStatus::Assigned).unwrap();
        assert!(matcher.tag_contains_word(&tutorial, "0").unwrap());
    }

    #[test]
    fn test_tag_contains_word_empty_registry() {
        let tutorials: Vec<TutorialTag> = Vec::new();
        let matcher = Matcher::new(&tutorials);

        let tag = create_tag("T05", TagStatus::Available).unwrap();
        assert!(matcher.tag_contains_word(&tag, "t05").unwrap());
        assert!(!matcher.tag_contains_word(&tag, "t0").unwrap());
    }

    #[test]
    fn test_tag_contains_word_invalid_word() {
        let tutorials = registry(&["T05"]);
        let matcher = Matcher::new(&tutorials);
        let tag = create_tag("T05", TagStatus::Available).unwrap();

        assert!(matches!(
            matcher.tag_contains_word(&tag, "   "),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_contains_tutorial_group() {
        let tutorials = registry(&["T05", "T06"]);
        let matcher = Matcher::new(&tutorials);

        let available = create_tag("t05", TagStatus::Available).unwrap();
        assert!(matcher.contains_tutorial_group(&available, "T05").unwrap());

        // 状态不是 Available
        let assigned = create_tag("T05", TagStatus::Assigned).unwrap();
        assert!(!matcher.contains_tutorial_group(&assigned, "T05").unwrap());

        // 名称不完全相同
        let longer = create_tag("T05x", TagStatus::Available).unwrap();
        assert!(!matcher.contains_tutorial_group(&longer, "T05").unwrap());

        // 注册表中不存在
        let unknown = create_tag("T07", TagStatus::Available).unwrap();
        assert!(!matcher.contains_tutorial_group(&unknown, "T07").unwrap());
    }

    #[test]
    fn test_contains_tutorial_group_invalid_argument() {
        let tutorials = registry(&["T05"]);
        let matcher = Matcher::new(&tutorials);
        let tag = create_tag("T05", TagStatus::Available).unwrap();

        assert!(matches!(
            matcher.contains_tutorial_group(&tag, ""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            matcher.contains_tutorial_group(&tag, "T05 T06"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unbound_accessor_propagates_illegal_state() {
        let accessor = RegistryAccessor::new();
        let matcher = Matcher::new(&accessor);
        let tag = create_tag("T05", TagStatus::Available).unwrap();

        assert!(matches!(
            matcher.tag_contains_word(&tag, "t05"),
            Err(Error::IllegalState(_))
        ));
        assert!(matches!(
            matcher.contains_tutorial_group(&tag, "T05"),
            Err(Error::IllegalState(_))
        ));
    }
}
