use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// 记录文件自身 key 的属性名
pub const FILE_NAME_KEY: &str = "_fileName";

/// 文件映射：文件路径 → 文件记录
///
/// 由宿主管线持有，保持宿主的插入顺序
pub type FileMap = IndexMap<String, FileRecord>;

/// 管线级元数据快照
pub type Metadata = Map<String, JsonValue>;

/// 文件记录（可变属性集合）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRecord(Map<String, JsonValue>);

impl FileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// 设置属性，返回旧值
    pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) -> Option<JsonValue> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// 处理前写入的文件 key
    pub fn file_name(&self) -> Option<&str> {
        self.0.get(FILE_NAME_KEY).and_then(JsonValue::as_str)
    }

    pub fn set_file_name(&mut self, name: &str) {
        self.0
            .insert(FILE_NAME_KEY.to_string(), JsonValue::String(name.to_string()));
    }

    pub fn attributes(&self) -> &Map<String, JsonValue> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, JsonValue> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, JsonValue>> for FileRecord {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_file_name() {
        let mut record = FileRecord::new();
        assert_eq!(record.file_name(), None);

        record.set_file_name("posts/hello.md");
        assert_eq!(record.file_name(), Some("posts/hello.md"));
        assert_eq!(record.get(FILE_NAME_KEY), Some(&json!("posts/hello.md")));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut record = FileRecord::new();
        record.insert("title", json!("Hello"));
        record.insert("contentful", json!({ "content_type": "post" }));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({ "title": "Hello", "contentful": { "content_type": "post" } })
        );

        let back: FileRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
