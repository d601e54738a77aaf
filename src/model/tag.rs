//! 标签定义
//!
//! 标签 = 名称 + 状态；类型（作业/出勤/辅导组）由状态唯一确定，创建后不可变

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{check_argument, Error, Result};
use crate::matcher::check_tutorial_group;

/// 标签名校验失败时的固定提示
pub const MESSAGE_CONSTRAINTS: &str = "Tags names should be alphanumeric";

// ============================================================================
// 标签状态 / 类型
// ============================================================================

/// 标签状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagStatus {
    /// 作业：完成且质量良好
    CompleteGood,
    CompleteBad,
    IncompleteGood,
    IncompleteBad,
    /// 出勤：到场
    Present,
    Absent,
    /// 辅导组：尚未分配
    Available,
    /// 辅导组：已分配
    Assigned,
    /// 新建作业标签的默认状态
    DefaultStatus,
}

/// 标签类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagType {
    Assignment,
    Attendance,
    Tutorial,
}

impl TagType {
    /// 状态 → 类型（全映射）
    pub fn from_status(status: TagStatus) -> Self {
        match status {
            TagStatus::CompleteGood
            | TagStatus::CompleteBad
            | TagStatus::IncompleteGood
            | TagStatus::IncompleteBad
            | TagStatus::DefaultStatus => TagType::Assignment,
            TagStatus::Present | TagStatus::Absent => TagType::Attendance,
            TagStatus::Available | TagStatus::Assigned => TagType::Tutorial,
        }
    }

    /// 获取显示名称（用于日志）
    pub fn display_name(&self) -> &'static str {
        match self {
            TagType::Assignment => "assignment",
            TagType::Attendance => "attendance",
            TagType::Tutorial => "tutorial",
        }
    }
}

// ============================================================================
// 标签名规则
// ============================================================================

/// 标签名校验规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TagNameRule {
    /// 非空且全部为字母/数字（默认）
    #[default]
    Alphanumeric,
    /// 去除首尾空白后非空
    NonBlank,
}

impl TagNameRule {
    pub fn is_valid(&self, name: &str) -> bool {
        match self {
            TagNameRule::Alphanumeric => {
                !name.is_empty() && name.chars().all(char::is_alphanumeric)
            }
            TagNameRule::NonBlank => !name.trim().is_empty(),
        }
    }
}

/// 按默认规则校验标签名
pub fn is_valid_tag_name(name: &str) -> bool {
    TagNameRule::default().is_valid(name)
}

// ============================================================================
// 标签
// ============================================================================

/// 标签（不可变值对象）
///
/// 相等性与哈希只看名称（区分大小写），忽略状态与类型。
#[derive(Debug, Clone)]
pub struct Tag {
    tag_name: String,
    tag_status: TagStatus,
    tag_type: TagType,
}

/// 按名称和状态创建标签，类型由状态决定
///
/// # Errors
/// `name` 去除首尾空白后为空时返回 InvalidArgument
pub fn create_tag(name: &str, status: TagStatus) -> Result<Tag> {
    check_argument(!name.trim().is_empty(), "Tag name cannot be empty")?;
    Ok(Tag {
        tag_name: name.to_string(),
        tag_status: status,
        tag_type: TagType::from_status(status),
    })
}

impl Tag {
    pub fn name(&self) -> &str {
        &self.tag_name
    }

    pub fn status(&self) -> TagStatus {
        self.tag_status
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn is_assignment(&self) -> bool {
        self.tag_type == TagType::Assignment
    }

    pub fn is_attendance(&self) -> bool {
        self.tag_type == TagType::Attendance
    }

    pub fn is_tutorial(&self) -> bool {
        self.tag_type == TagType::Tutorial
    }

    /// 以新状态重建同名标签（类型重新推导）
    pub fn with_status(&self, status: TagStatus) -> Tag {
        Tag {
            tag_name: self.tag_name.clone(),
            tag_status: status,
            tag_type: TagType::from_status(status),
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.tag_name == other.tag_name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag_name.hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.tag_name)
    }
}

// ============================================================================
// 辅导组标签
// ============================================================================

/// 辅导组标签，保证类型为 Tutorial 且名称为单个词
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TutorialTag(Tag);

impl TutorialTag {
    /// 创建处于 Available 状态的辅导组标签
    ///
    /// # Errors
    /// 名称为空或包含空白时返回 InvalidArgument
    pub fn new(name: &str) -> Result<Self> {
        Self::try_from(create_tag(name, TagStatus::Available)?)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn as_tag(&self) -> &Tag {
        &self.0
    }

    pub fn into_tag(self) -> Tag {
        self.0
    }
}

impl TryFrom<Tag> for TutorialTag {
    type Error = Error;

    fn try_from(tag: Tag) -> Result<Self> {
        if !tag.is_tutorial() {
            return Err(Error::InvalidArgument(format!(
                "{} is a {} tag, not a tutorial group",
                tag.name(),
                tag.tag_type().display_name()
            )));
        }
        // 名称须满足辅导组参数要求（单个词）
        check_tutorial_group(tag.name())?;
        Ok(Self(tag))
    }
}

impl fmt::Display for TutorialTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
