//! Frontend Models
//!
//! Block data as owned by the page.

use serde::{Deserialize, Serialize};

/// Block discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    #[default]
    TodoList,
    /// Any block kind this page does not render
    #[serde(other)]
    Other,
}

/// A document block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl Block {
    /// Empty, unchecked to-do block
    pub fn new_todo(id: String) -> Self {
        Self {
            id,
            block_type: BlockType::TodoList,
            content: String::new(),
            checked: Some(false),
        }
    }

    pub fn is_todo(&self) -> bool {
        self.block_type == BlockType::TodoList
    }

    /// Missing flag counts as unchecked
    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }
}

/// Payload of an update callback
#[derive(Debug, Clone, PartialEq)]
pub struct BlockUpdate {
    pub id: String,
    pub content: String,
    /// None leaves the stored flag untouched
    pub checked: Option<bool>,
}

pub fn make_block_id(now_ms: u64, rand: u64) -> String {
    format!("block-{now_ms}-{rand}")
}
