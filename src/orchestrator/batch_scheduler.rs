//! 分批调度器 - 编排层
//!
//! ## 职责
//!
//! 把任意数量的工作项按固定大小分批发送，批次之间固定等待，
//! 以满足外部 API 的限流要求。
//!
//! ## 调度方式
//!
//! 1. **分批**：按原始顺序切分，每批最多 `chunk_size` 个
//! 2. **发送**：一批内的每个工作项各自 `tokio::spawn`，互不等待
//! 3. **等待**：发送完一批后固定等待 `chunk_interval` 再发送下一批，
//!    不等待本批完成（只限制发送速率）；最后一批之后不再等待
//! 4. **汇总**：所有批次发送完毕后统一等待，结果保持输入顺序
//!
//! 任意一个工作项失败，整体以最先观察到的错误返回；
//! 其余任务不会被取消，结果被丢弃。

use std::fmt::Display;
use std::future::Future;
use std::ops::Range;
use std::time::Duration;

use futures::stream::{FuturesUnordered, TryStreamExt};
use tokio::time::sleep;
use tracing::{debug, error};

use crate::config::{Config, CHUNK_INTERVAL_MS, CHUNK_SIZE};
use crate::error::{AppResult, ConfigError, PluginError};
use crate::utils::logging::log_chunk_start;

/// 分批调度器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchScheduler {
    chunk_size: usize,
    chunk_interval: Duration,
}

impl BatchScheduler {
    /// 创建调度器，批次大小必须大于 0
    pub fn new(chunk_size: usize, chunk_interval: Duration) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(Self {
            chunk_size,
            chunk_interval,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config.chunk_size, config.chunk_interval())
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_interval(&self) -> Duration {
        self.chunk_interval
    }

    /// 批次数量：⌈len / chunk_size⌉
    pub fn chunk_count(&self, len: usize) -> usize {
        len.div_ceil(self.chunk_size)
    }

    /// 分批发送所有工作项并等待全部完成
    ///
    /// # 参数
    /// - `items`: 工作项（按顺序）
    /// - `launch`: 把一个工作项转换为任务的函数
    ///
    /// # 返回
    /// 返回与 `items` 顺序一致的结果列表
    pub async fn run<I, T, F, Fut>(&self, items: Vec<I>, launch: F) -> AppResult<Vec<T>>
    where
        I: Display,
        F: Fn(I) -> Fut,
        Fut: Future<Output = AppResult<T>> + Send + 'static,
        T: Send + 'static,
    {
        let total = items.len();
        let total_chunks = self.chunk_count(total);
        let mut handles = Vec::with_capacity(total);
        let mut items = items.into_iter();

        for (chunk_index, range) in chunk_ranges(total, self.chunk_size).into_iter().enumerate() {
            let chunk_num = chunk_index + 1;
            log_chunk_start(chunk_num, total_chunks, range.start + 1, range.end, total);

            for item in items.by_ref().take(range.len()) {
                let label = item.to_string();
                handles.push((label, tokio::spawn(launch(item))));
            }

            if chunk_num < total_chunks {
                debug!(
                    "⏳ 第 {} 批已发送，等待 {:?} 后发送下一批",
                    chunk_num, self.chunk_interval
                );
                sleep(self.chunk_interval).await;
            }
        }

        // 按完成顺序收集，结果按下标放回原位
        let mut pending: FuturesUnordered<_> = handles
            .into_iter()
            .enumerate()
            .map(|(index, (label, handle))| async move {
                match handle.await {
                    Ok(result) => result.map(|value| (index, value)),
                    Err(e) => {
                        error!("{} 任务执行失败: {}", label, e);
                        Err(PluginError::TaskFailed {
                            key: label,
                            reason: e.to_string(),
                        })
                    }
                }
            })
            .collect();

        let mut results: Vec<Option<T>> = (0..total).map(|_| None).collect();
        while let Some((index, value)) = pending.try_next().await? {
            results[index] = Some(value);
        }

        Ok(results.into_iter().flatten().collect())
    }
}

impl Default for BatchScheduler {
    /// Contentful 限流：每批 100 个，间隔 1500ms
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            chunk_interval: Duration::from_millis(CHUNK_INTERVAL_MS),
        }
    }
}

/// 计算每一批的下标范围
///
/// `chunk_size` 为 0 时返回空列表
pub fn chunk_ranges(len: usize, chunk_size: usize) -> Vec<Range<usize>> {
    if chunk_size == 0 {
        return Vec::new();
    }
    (0..len)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(len))
        .collect()
}
