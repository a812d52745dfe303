use crate::error::ConfigError;
use crate::models::file_record::Metadata;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// 插件选项
///
/// `settings` 原样转交给处理器，插件本身不解释任何字段；
/// 运行时再附加管线的元数据快照。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    #[serde(flatten)]
    pub settings: Map<String, JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl PluginOptions {
    /// 从 JSON 值创建选项，`null` 视为空选项
    pub fn new(settings: JsonValue) -> Result<Self, ConfigError> {
        match settings {
            JsonValue::Null => Ok(Self::default()),
            JsonValue::Object(settings) => Ok(Self {
                settings,
                metadata: None,
            }),
            other => Err(ConfigError::OptionsNotObject {
                actual: json_type_name(&other).to_string(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.settings.get(key)
    }

    /// 附加元数据快照（覆盖已有的）
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_accepts_object_and_null() {
        let options = PluginOptions::new(json!({ "space_id": "abc" })).unwrap();
        assert_eq!(options.get("space_id"), Some(&json!("abc")));
        assert!(options.metadata.is_none());

        let empty = PluginOptions::new(JsonValue::Null).unwrap();
        assert!(empty.settings.is_empty());
    }

    #[test]
    fn test_new_rejects_non_object() {
        let err = PluginOptions::new(json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::OptionsNotObject {
                actual: "array".to_string()
            }
        );
    }

    #[test]
    fn test_with_metadata_keeps_settings() {
        let mut metadata = Metadata::new();
        metadata.insert("site".to_string(), json!("example.com"));

        let options = PluginOptions::new(json!({ "access_token": "t" }))
            .unwrap()
            .with_metadata(metadata.clone());

        assert_eq!(options.metadata, Some(metadata));
        assert_eq!(options.get("access_token"), Some(&json!("t")));
    }
}
