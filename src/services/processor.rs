//! 文件处理器 - 业务能力层
//!
//! 描述"对单个文件做查询/补全"的能力，具体的 API 调用由外部实现

use async_trait::async_trait;
use std::future::Future;

use crate::error::ProcessingError;
use crate::models::{FileMap, FileRecord, PluginOptions};

/// 处理器返回值
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutput {
    /// 更新后的记录，整体替换原 key 对应的记录
    Record(FileRecord),
    /// 派生出的文件映射（例如查询结果生成了新文件），逐个 key 写回
    Files(FileMap),
}

/// 文件处理器
///
/// 职责：
/// - 只处理单个文件记录
/// - 不关心分批和限流
#[async_trait]
pub trait FileProcessor: Send + Sync {
    async fn process(
        &self,
        record: FileRecord,
        options: &PluginOptions,
    ) -> Result<ProcessOutput, ProcessingError>;
}

/// 闭包处理器
///
/// 把 `Fn(FileRecord, PluginOptions) -> Future` 包装成 [`FileProcessor`]
pub struct FnProcessor<F> {
    f: F,
}

impl<F> FnProcessor<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> FileProcessor for FnProcessor<F>
where
    F: Fn(FileRecord, PluginOptions) -> Fut + Send + Sync,
    Fut: Future<Output = Result<ProcessOutput, ProcessingError>> + Send + 'static,
{
    async fn process(
        &self,
        record: FileRecord,
        options: &PluginOptions,
    ) -> Result<ProcessOutput, ProcessingError> {
        (self.f)(record, options.clone()).await
    }
}
