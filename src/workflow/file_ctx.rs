//! 文件处理上下文
//!
//! 封装"我正在处理哪个文件"这一信息

use std::fmt::Display;

use crate::models::FileRecord;

/// 单个工作项：文件 key + 文件记录
#[derive(Debug, Clone, PartialEq)]
pub struct FileCtx {
    /// 文件路径（文件映射中的 key）
    pub key: String,

    /// 文件在本次运行中的序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 文件记录（调用方已在文件映射上写入 `_fileName`）
    pub record: FileRecord,
}

impl FileCtx {
    /// 创建工作项，记录原样保存
    pub fn new(key: impl Into<String>, index: usize, record: FileRecord) -> Self {
        Self {
            key: key.into(),
            index,
            record,
        }
    }
}

impl Display for FileCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件 #{} {}]", self.index, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_record_untouched() {
        let mut record = FileRecord::new();
        record.set_file_name("index.md");

        let ctx = FileCtx::new("index.md", 1, record.clone());
        assert_eq!(ctx.record, record);
        assert_eq!(ctx.to_string(), "[文件 #1 index.md]");

        // 标签只由插件写在文件映射上
        let untagged = FileCtx::new("about.md", 2, FileRecord::new());
        assert_eq!(untagged.record.file_name(), None);
    }
}
