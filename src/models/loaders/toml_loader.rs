use crate::models::options::PluginOptions;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载插件选项
///
/// 文件中的所有键原样进入 `settings`，`[metadata]` 表（如果有）进入 `metadata`
pub async fn load_options(toml_file_path: &Path) -> Result<PluginOptions> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    parse_options(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))
}

/// 从 TOML 字符串解析插件选项
pub fn parse_options(content: &str) -> Result<PluginOptions> {
    let options: PluginOptions = toml::from_str(content)?;
    tracing::debug!("已加载 {} 个插件选项", options.settings.len());
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_options() {
        let options = parse_options(
            r#"
            space_id = "space"
            access_token = "token"

            [metadata]
            site = "blog"
            "#,
        )
        .unwrap();

        assert_eq!(options.get("space_id"), Some(&json!("space")));
        assert_eq!(options.get("access_token"), Some(&json!("token")));
        assert!(options.get("metadata").is_none());
        assert_eq!(
            options.metadata.and_then(|m| m.get("site").cloned()),
            Some(json!("blog"))
        );
    }

    #[test]
    fn test_parse_empty_options() {
        let options = parse_options("").unwrap();
        assert!(options.settings.is_empty());
        assert!(options.metadata.is_none());
    }

    #[tokio::test]
    async fn test_load_options_missing_file() {
        let err = load_options(Path::new("missing/options.toml"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing/options.toml"));
    }
}
