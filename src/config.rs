//! Page Configuration
//!
//! Title, placeholder text, log level and the seed blocks of the page,
//! read from `config/page.json` embedded at build time.

use serde::Deserialize;

use crate::models::Block;

const PAGE_CONFIG: &str = include_str!("../config/page.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Shown in place of empty to-do text
    pub placeholder: String,
    pub log_level: String,
    pub blocks: Vec<Block>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            placeholder: "To-do".to_string(),
            log_level: "info".to_string(),
            blocks: Vec::new(),
        }
    }
}

pub fn parse(json: &str) -> Result<AppConfig, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

pub fn load() -> Result<AppConfig, String> {
    parse(PAGE_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockType;

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(parse("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse(r#"{"title": "Chores", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.title, "Chores");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.placeholder, "To-do");
        assert!(config.blocks.is_empty());
    }

    #[test]
    fn test_seed_blocks() {
        let config = parse(
            r#"{"blocks": [
                {"id": "a", "type": "todo-list", "content": "one", "checked": true},
                {"id": "b", "type": "paragraph", "content": "two"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(config.blocks.len(), 2);
        assert!(config.blocks[0].is_checked());
        assert_eq!(config.blocks[1].block_type, BlockType::Other);
    }

    #[test]
    fn test_invalid_json() {
        let err = parse("{ not json").unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = load().unwrap();
        assert!(!config.blocks.is_empty());
        assert!(config.blocks.iter().all(|b| b.is_todo()));
    }
}
