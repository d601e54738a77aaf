//! 标签的 JSON 表示

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::tag::{create_tag, Tag, TagNameRule, TagStatus, TagType, MESSAGE_CONSTRAINTS};

/// 存储中的标签类型与状态推导出的类型不一致
pub const MESSAGE_TYPE_MISMATCH: &str = "Tag type does not match tag status";

/// 标签的持久化表示
///
/// 字段均可缺失，加载时再逐项校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedTag {
    pub tag_name: Option<String>,
    pub tag_status: Option<TagStatus>,
    pub tag_type: Option<TagType>,
}

impl From<&Tag> for JsonAdaptedTag {
    fn from(source: &Tag) -> Self {
        Self {
            tag_name: Some(source.name().to_string()),
            tag_status: Some(source.status()),
            tag_type: Some(source.tag_type()),
        }
    }
}

impl JsonAdaptedTag {
    /// 按默认标签名规则转换为模型标签
    pub fn to_model_type(&self) -> Result<Tag> {
        self.to_model_type_with(TagNameRule::default())
    }

    /// 转换为模型标签
    ///
    /// # Errors
    /// - 名称或状态缺失：MissingArgument
    /// - 名称不满足 `rule`：IllegalValue(MESSAGE_CONSTRAINTS)
    /// - 存储的类型与状态推导出的类型不一致：IllegalValue(MESSAGE_TYPE_MISMATCH)
    pub fn to_model_type_with(&self, rule: TagNameRule) -> Result<Tag> {
        let name = self
            .tag_name
            .as_deref()
            .ok_or(Error::MissingArgument("tagName"))?;
        let status = self.tag_status.ok_or(Error::MissingArgument("tagStatus"))?;

        if !rule.is_valid(name) {
            tracing::warn!("拒绝加载标签，名称不合法: {:?}", name);
            return Err(Error::IllegalValue(MESSAGE_CONSTRAINTS.to_string()));
        }

        if let Some(stored) = self.tag_type {
            let derived = TagType::from_status(status);
            if stored != derived {
                tracing::warn!(
                    "拒绝加载标签 {}: 存储类型 {:?} 与状态 {:?} 不一致",
                    name,
                    stored,
                    status
                );
                return Err(Error::IllegalValue(MESSAGE_TYPE_MISMATCH.to_string()));
            }
        }

        create_tag(name, status)
    }
}
