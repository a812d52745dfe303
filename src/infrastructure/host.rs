//! 宿主管线 - 基础设施层
//!
//! 插件只从宿主读取元数据，不持有文件映射

use crate::models::Metadata;

/// 宿主管线接口
///
/// 职责：
/// - 提供管线级元数据快照
/// - 不认识单个文件
pub trait PipelineHost: Send + Sync {
    /// 返回当前元数据的快照
    fn metadata(&self) -> Metadata;
}

/// 内存中的宿主（嵌入方和测试使用）
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    metadata: Metadata,
}

impl MemoryHost {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}

impl PipelineHost for MemoryHost {
    fn metadata(&self) -> Metadata {
        self.metadata.clone()
    }
}
