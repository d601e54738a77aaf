// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::model::tag::TagNameRule;

// ============================================================================
// 全局配置操作锁
// ============================================================================

lazy_static::lazy_static! {
    /// 全局配置操作锁
    ///
    /// 保护 load->modify->save 序列
    ///
    /// 使用方式：
    /// ```ignore
    /// let _guard = CONFIG_LOCK.lock().unwrap();
    /// let (mut config, _) = AppConfig::load()?;
    /// // 修改 config...
    /// config.save()?;
    /// ```
    pub static ref CONFIG_LOCK: Mutex<()> = Mutex::new(());
}

/// 支持的日志级别
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

fn default_log_level() -> String {
    "info".to_string()
}

// ============================================================================
// 应用配置
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 日志级别 (trace/debug/info/warn/error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 加载标签时使用的名称规则
    #[serde(default)]
    pub tag_name_rule: TagNameRule,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            log_level: default_log_level(),
            tag_name_rule: TagNameRule::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            anyhow::bail!(
                "未知日志级别: {}（可选: {}）",
                self.log_level,
                LOG_LEVELS.join("/")
            );
        }
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join("TutorBook");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// 从默认路径加载配置
    ///
    /// 返回 (配置, 是否使用了默认值)
    pub fn load() -> Result<(Self, bool)> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<(Self, bool)> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::warn!("配置文件不存在，使用默认配置");
            return Ok((Self::new(), true));
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::info!("配置加载成功");
        Ok((config, false))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("保存配置到: {:?}", path);

        // 原子写入：先写临时文件，再 rename 覆盖目标（rename 会替换已有文件）
        let temp_path = path.with_extension("json.tmp");

        let written = std::fs::write(&temp_path, &content)
            .and_then(|_| std::fs::rename(&temp_path, path));

        if let Err(e) = written {
            tracing::error!("保存配置失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!("配置保存成功");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().unwrap();
        let (config, defaulted) = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(defaulted);
        assert_eq!(config, AppConfig::new());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            log_level: "debug".to_string(),
            tag_name_rule: TagNameRule::NonBlank,
        };
        config.save_to(&path).unwrap();
        // 覆盖已有文件
        config.save_to(&path).unwrap();

        let (loaded, defaulted) = AppConfig::load_from(&path).unwrap();
        assert!(!defaulted);
        assert_eq!(loaded, config);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let dir = tempdir().unwrap();
        // 目标路径是目录，rename 失败
        let path = dir.path().join("config.json");
        std::fs::create_dir(&path).unwrap();

        assert!(AppConfig::new().save_to(&path).is_err());
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "tag_name_rule": "non_blank" }"#).unwrap();

        let (loaded, _) = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.log_level, "info");
        assert_eq!(loaded.tag_name_rule, TagNameRule::NonBlank);
    }

    #[test]
    fn test_locked_load_modify_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let _guard = CONFIG_LOCK.lock().unwrap();
        let (mut config, _) = AppConfig::load_from(&path).unwrap();
        config.log_level = "warn".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap().0.log_level, "warn");
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = AppConfig::new();
        config.log_level = "WARN".to_string();
        assert!(config.validate().is_ok());

        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        let dir = tempdir().unwrap();
        assert!(config.save_to(&dir.path().join("config.json")).is_err());
    }
}
