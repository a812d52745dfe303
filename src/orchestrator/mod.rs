//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责分批调度和结果合并，是整个插件的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_scheduler` - 分批调度器
//! - 按固定大小切分工作项
//! - 每批并发发送，批次之间固定等待（限流）
//! - 统一等待所有任务，结果保持输入顺序
//!
//! ### `plugin` - 插件入口
//! - 附加元数据快照
//! - 给文件打 `_fileName` 标签
//! - 合并结果到文件映射
//! - 转换错误并调用完成回调
//!
//! ## 层次关系
//!
//! ```text
//! plugin (处理 FileMap)
//!     ↓
//! batch_scheduler (处理 Vec<FileCtx>)
//!     ↓
//! workflow::FileFlow (处理单个文件)
//!     ↓
//! services::FileProcessor (外部查询能力)
//! ```

pub mod batch_scheduler;
pub mod plugin;

// 重新导出主要类型
pub use batch_scheduler::{chunk_ranges, BatchScheduler};
pub use plugin::ContentfulFiles;
