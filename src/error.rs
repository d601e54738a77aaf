// 错误类型
//
// 模型层与匹配层共用的错误枚举
// 文件/配置 I/O 仍使用 anyhow::Result

use thiserror::Error;

/// 模型/匹配错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// 必填字段缺失（持久化数据中的 null）
    #[error("{0} must not be null")]
    MissingArgument(&'static str),

    /// 参数结构错误（空词、多词等）
    #[error("{0}")]
    InvalidArgument(String),

    /// 在未绑定时访问注册表
    #[error("{0}")]
    IllegalState(String),

    /// 持久化数据违反约束
    #[error("{0}")]
    IllegalValue(String),

    #[error("This person already exists in the address book: {0}")]
    DuplicatePerson(String),

    #[error("The person could not be found: {0}")]
    PersonNotFound(String),

    #[error("This tutorial group already exists: {0}")]
    DuplicateTutorialTag(String),

    #[error("The tutorial group could not be found: {0}")]
    TutorialTagNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// 参数检查，失败时返回 InvalidArgument
pub(crate) fn check_argument(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(message.to_string()))
    }
}
