//! # Contentful Files
//!
//! 静态站点构建管线的插件：按文件元数据去 Contentful 查询内容，
//! 分批发送请求以满足 API 限流（每批 100 个，间隔 1500ms）。
//!
//! ## 架构设计
//!
//! 本插件采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 宿主管线接口，只暴露元数据
//! - `PipelineHost` / `MemoryHost`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个文件
//! - `FileProcessor` - 外部查询能力（具体实现由调用方提供）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个文件"的处理流程
//! - `FileCtx` - 工作项（key + 记录）
//! - `FileFlow` - 日志 → 处理 → 按 key 返回结果
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_scheduler` - 分批调度器，控制发送速率
//! - `orchestrator/plugin` - 插件入口，合并结果、转换错误
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, CHUNK_INTERVAL_MS, CHUNK_SIZE};
pub use error::{AppResult, ConfigError, PluginError, ProcessingError};
pub use infrastructure::{MemoryHost, PipelineHost};
pub use models::{FileMap, FileRecord, Metadata, PluginOptions};
pub use orchestrator::{BatchScheduler, ContentfulFiles};
pub use services::{FileProcessor, FnProcessor, ProcessOutput};
pub use workflow::{FileCtx, FileFlow, FileOutput};
