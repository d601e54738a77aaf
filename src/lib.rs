// TutorBook 核心库
//
// 联系人标签（作业/出勤/辅导组）的匹配、校验与持久化表示

pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod storage;
pub mod string_util;

pub use config::{AppConfig, CONFIG_LOCK};
pub use error::{Error, Result};
pub use matcher::Matcher;
pub use model::filter::PersonFilter;
pub use model::person::Person;
pub use model::registry::{global_registry, RegistryAccessor, SharedModel, TutorialTagSource};
pub use model::tag::{
    create_tag, is_valid_tag_name, Tag, TagNameRule, TagStatus, TagType, TutorialTag,
};
pub use model::Model;
pub use storage::JsonAdaptedTag;

use tracing::Level;

/// 初始化日志
///
/// 级别取自配置，无法识别时回退到 info；重复调用不会报错
pub fn init_logging(config: &AppConfig) {
    let level = config
        .log_level
        .parse::<Level>()
        .unwrap_or(Level::INFO);

    if tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .is_err()
    {
        tracing::debug!("日志已初始化，跳过");
    }
}
