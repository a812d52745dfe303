//! Contentful 文件插件 - 编排层
//!
//! ## 职责
//!
//! 插件的入口，由宿主管线调用，负责一次完整的处理：
//!
//! 1. **元数据快照**：把宿主的元数据附加到插件选项
//! 2. **打标签**：把每个文件的 key 写入 `_fileName`
//! 3. **分批处理**：委托 [`BatchScheduler`] 分批发送
//! 4. **合并结果**：按 key 浅合并回文件映射
//! 5. **错误转换**：失败时生成带 details 的友好错误，交给完成回调
//!
//! 插件只在全部结果返回后才写文件映射（打标签除外）。

use std::sync::Arc;

use tracing::{error, warn};

use crate::config::Config;
use crate::error::{AppResult, PluginError};
use crate::infrastructure::PipelineHost;
use crate::models::{FileMap, PluginOptions};
use crate::orchestrator::batch_scheduler::BatchScheduler;
use crate::services::FileProcessor;
use crate::utils::logging::{log_files, log_run_complete, log_startup};
use crate::workflow::{FileCtx, FileFlow};

/// 插件主结构
pub struct ContentfulFiles {
    config: Config,
    scheduler: BatchScheduler,
    options: PluginOptions,
    processor: Arc<dyn FileProcessor>,
}

impl ContentfulFiles {
    /// 使用默认配置创建插件
    pub fn new(options: PluginOptions, processor: Arc<dyn FileProcessor>) -> Self {
        Self {
            config: Config::default(),
            scheduler: BatchScheduler::default(),
            options,
            processor,
        }
    }

    /// 使用自定义配置创建插件
    pub fn with_config(
        config: Config,
        options: PluginOptions,
        processor: Arc<dyn FileProcessor>,
    ) -> AppResult<Self> {
        config.validate()?;
        let scheduler = BatchScheduler::from_config(&config)?;
        Ok(Self {
            config,
            scheduler,
            options,
            processor,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 处理文件映射
    ///
    /// 成功时文件映射包含所有处理结果；失败时只保留 `_fileName` 标签，不写入任何结果
    pub async fn run(&self, files: &mut FileMap, host: &dyn PipelineHost) -> AppResult<()> {
        let options = Arc::new(self.options.clone().with_metadata(host.metadata()));

        log_files("处理前的文件", files, self.config.verbose_logging);

        let file_names: Vec<String> = files.keys().cloned().collect();
        if file_names.is_empty() {
            warn!("⚠️ 没有需要处理的文件");
            return Ok(());
        }

        log_startup(&self.config, file_names.len());

        let mut items = Vec::with_capacity(file_names.len());
        for (idx, key) in file_names.iter().enumerate() {
            if let Some(record) = files.get_mut(key) {
                record.set_file_name(key);
                items.push(FileCtx::new(key.clone(), idx + 1, record.clone()));
            }
        }

        let flow = FileFlow::new(self.processor.clone(), options);
        let outputs = self
            .scheduler
            .run(items, move |ctx| {
                let flow = flow.clone();
                async move { flow.run(ctx).await.map_err(PluginError::from) }
            })
            .await?;

        for output in outputs {
            output.merge_into(files);
        }

        log_run_complete(file_names.len(), files.len());
        log_files("处理后的文件", files, self.config.verbose_logging);

        Ok(())
    }

    /// 宿主管线形式的入口
    ///
    /// 成功时调用 `done(None)`，失败时调用 `done(Some(error))`
    pub async fn run_with_callback<F>(&self, files: &mut FileMap, host: &dyn PipelineHost, done: F)
    where
        F: FnOnce(Option<PluginError>),
    {
        match self.run(files, host).await {
            Ok(()) => done(None),
            Err(e) => {
                error!("❌ Contentful 文件处理失败: {}", e);
                done(Some(e));
            }
        }
    }
}
