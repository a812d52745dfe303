use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 每批处理的文件数量（Contentful API 限制：每秒 100 次请求）
pub const CHUNK_SIZE: usize = 100;

/// 两批之间的等待时间（毫秒）
pub const CHUNK_INTERVAL_MS: u64 = 1500;

/// 插件配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 每批文件数量
    pub chunk_size: usize,
    /// 批次之间的等待时间（毫秒）
    pub chunk_interval_ms: u64,
    /// 是否以 info 级别输出处理前后的文件映射
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            chunk_interval_ms: CHUNK_INTERVAL_MS,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            chunk_size: std::env::var("CONTENTFUL_CHUNK_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.chunk_size),
            chunk_interval_ms: std::env::var("CONTENTFUL_CHUNK_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.chunk_interval_ms),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 字符串解析配置，缺省字段使用默认值
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载配置
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(())
    }

    pub fn chunk_interval(&self) -> Duration {
        Duration::from_millis(self.chunk_interval_ms)
    }
}
