//! 文件处理流程 - 流程层
//!
//! 定义"一个文件"的处理流程：记录日志 → 调用处理器 → 按 key 返回结果

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::ProcessingError;
use crate::models::{FileMap, PluginOptions};
use crate::services::{FileProcessor, ProcessOutput};
use crate::workflow::file_ctx::FileCtx;

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutput {
    /// 工作项的 key
    pub key: String,
    pub output: ProcessOutput,
}

impl FileOutput {
    /// 写回文件映射（浅合并：按顶层 key 整体替换）
    pub fn merge_into(self, files: &mut FileMap) {
        match self.output {
            ProcessOutput::Record(record) => {
                files.insert(self.key, record);
            }
            ProcessOutput::Files(derived) => {
                files.extend(derived);
            }
        }
    }
}

/// 文件处理流程
///
/// - 不持有文件映射
/// - 可以廉价克隆，每个任务持有一份
#[derive(Clone)]
pub struct FileFlow {
    processor: Arc<dyn FileProcessor>,
    options: Arc<PluginOptions>,
}

impl FileFlow {
    pub fn new(processor: Arc<dyn FileProcessor>, options: Arc<PluginOptions>) -> Self {
        Self { processor, options }
    }

    pub async fn run(&self, ctx: FileCtx) -> Result<FileOutput, ProcessingError> {
        debug!("{} Processing: {}", chrono::Local::now().to_rfc3339(), ctx.key);

        let FileCtx { key, index, record } = ctx;
        match self.processor.process(record, &self.options).await {
            Ok(output) => Ok(FileOutput { key, output }),
            Err(e) => {
                warn!("[文件 #{} {}] ❌ 处理失败: {}", index, key, e);
                Err(e)
            }
        }
    }
}
