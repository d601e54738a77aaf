//! 联系人

use std::fmt;

use crate::error::{check_argument, Result};
use crate::model::tag::Tag;

/// 联系人：姓名 + 有序标签（按标签相等性去重）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    tags: Vec<Tag>,
}

impl Person {
    pub fn new(name: &str, tags: impl IntoIterator<Item = Tag>) -> Result<Self> {
        check_argument(!name.trim().is_empty(), "Person name cannot be empty")?;

        let mut unique: Vec<Tag> = Vec::new();
        for tag in tags {
            // 同名标签只保留第一个
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }

        Ok(Self {
            name: name.trim().to_string(),
            tags: unique,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// 同名即视为同一联系人
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    /// 添加或替换同名标签，返回新的联系人
    pub fn with_tag(&self, tag: Tag) -> Person {
        let mut tags = self.tags.clone();
        match tags.iter_mut().find(|t| **t == tag) {
            Some(existing) => *existing = tag,
            None => tags.push(tag),
        }
        Person {
            name: self.name.clone(),
            tags,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for tag in &self.tags {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}
