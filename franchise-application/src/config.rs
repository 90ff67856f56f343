//! 应用配置
//!
//! 通过 TOML 描述存储后端与日志设置，所有字段都有默认值：
//!
//! ```toml
//! [store]
//! backend = "json_file"
//! path = "data/franchises.json"
//!
//! [log]
//! filter = "franchise_application=debug,info"
//! format = "json"
//! ```
use franchise_domain::model::Franchise;
use franchise_domain::persist::{AggregateStore, InMemoryStore, JsonFileStore};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub log: LogConfig,
}

/// 存储后端
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    #[default]
    Memory,
    JsonFile {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` 指令；设置了 `RUST_LOG` 时以环境变量为准
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "franchise_application=info,franchise_domain=info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

/// 按配置构造加盟商聚合存储
pub fn build_store(config: &StoreConfig) -> Arc<dyn AggregateStore<Franchise>> {
    match config {
        StoreConfig::Memory => Arc::new(InMemoryStore::<Franchise>::new()),
        StoreConfig::JsonFile { path } => Arc::new(JsonFileStore::<Franchise>::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.store, StoreConfig::Memory);
        assert_eq!(cfg.log, LogConfig::default());
    }

    #[test]
    fn json_file_backend_and_log_format() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [store]
            backend = "json_file"
            path = "data/franchises.json"

            [log]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(
            cfg.store,
            StoreConfig::JsonFile {
                path: PathBuf::from("data/franchises.json")
            }
        );
        assert_eq!(cfg.log.format, LogFormat::Json);
        assert_eq!(cfg.log.filter, LogConfig::default().filter);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = AppConfig::from_toml_str("[store]\nbackend = \"mongo\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load("/definitely/not/here.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, PathBuf::from("/definitely/not/here.toml")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
