//! 日志工具模块
//!
//! 提供日志初始化以及格式化输出的辅助函数

use crate::config::Config;
use crate::models::FileMap;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认 info 级别，可通过 `RUST_LOG` 覆盖；重复调用不会报错
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录插件启动信息
///
/// # 参数
/// - `config`: 插件配置
/// - `total`: 待处理文件数
pub fn log_startup(config: &Config, total: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 Contentful 文件处理启动");
    info!("📄 待处理文件: {}", total);
    info!(
        "📋 每批 {} 个，批次间隔 {}ms",
        config.chunk_size, config.chunk_interval_ms
    );
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
///
/// # 参数
/// - `chunk_num`: 批次编号
/// - `total_chunks`: 批次总数
/// - `start`: 起始文件编号
/// - `end`: 结束文件编号
/// - `total`: 文件总数
pub fn log_chunk_start(chunk_num: usize, total_chunks: usize, start: usize, end: usize, total: usize) {
    info!("📦 开始发送第 {}/{} 批: 文件 {}-{} / 共 {} 个", chunk_num, total_chunks, start, end, total);
}

/// 记录处理完成信息
pub fn log_run_complete(total: usize, merged: usize) {
    info!("{}", "─".repeat(60));
    info!(
        "✅ 全部处理完成 ({}): {} 个文件，合并后共 {} 个",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        total,
        merged
    );
    info!("{}", "─".repeat(60));
}

/// 输出文件映射快照
///
/// verbose 时以 info 级别输出，否则为 debug；对应级别未开启时不做序列化
pub fn log_files(label: &str, files: &FileMap, verbose: bool) {
    if !files_dump_enabled(verbose) {
        return;
    }
    let snapshot = serde_json::to_string(files).unwrap_or_default();
    let snapshot = truncate_text(&snapshot, 2000);
    if verbose {
        info!("{}: {}", label, snapshot);
    } else {
        debug!("{}: {}", label, snapshot);
    }
}

fn files_dump_enabled(verbose: bool) -> bool {
    if verbose {
        tracing::enabled!(Level::INFO)
    } else {
        tracing::enabled!(Level::DEBUG)
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
