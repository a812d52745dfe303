use serde_json::Value as JsonValue;
use thiserror::Error;

/// 插件错误类型
#[derive(Debug, Error)]
pub enum PluginError {
    /// 处理单个文件失败（来自外部处理器）
    #[error("{}", format_processing_failure(.0))]
    Processing(ProcessingError),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 任务执行失败（panic 或被中止）
    #[error("任务执行失败 ({key}): {reason}")]
    TaskFailed { key: String, reason: String },

    /// TOML 解析失败
    #[error("TOML解析失败: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 处理失败
///
/// 外部处理器（例如 Contentful 查询）返回的唯一错误种类，
/// `details` 携带 API 返回的结构化信息（可选）。
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ProcessingError {
    pub message: String,
    pub details: Option<JsonValue>,
}

impl ProcessingError {
    /// 创建不带 details 的处理错误
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// 附加结构化 details
    pub fn with_details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<ProcessingError> for PluginError {
    fn from(err: ProcessingError) -> Self {
        PluginError::Processing(err)
    }
}

/// 配置错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 批次大小为 0
    #[error("批次大小必须大于 0")]
    ZeroChunkSize,

    /// 选项不是 JSON 对象
    #[error("插件选项必须是对象，实际为: {actual}")]
    OptionsNotObject { actual: String },

    /// 配置文件无法加载
    #[error("无法加载配置文件 {path}: {reason}")]
    LoadFailed { path: String, reason: String },
}

/// 友好的错误格式：原始信息 + 格式化后的 details
///
/// details 为空时只返回原始信息
fn format_processing_failure(err: &ProcessingError) -> String {
    match err
        .details
        .as_ref()
        .and_then(|details| serde_json::to_string_pretty(details).ok())
    {
        Some(details) => format!("{}\n{}", err.message, details),
        None => err.message.clone(),
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, PluginError>;
