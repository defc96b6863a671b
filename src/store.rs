//! Page Block Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! This is the parent side of the to-do widget's callbacks.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Block, BlockUpdate};

/// Blocks of the open page
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    pub blocks: Vec<Block>,
}

impl PageState {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Block List Operations
// ========================

/// Apply an update to the block with the same id
pub fn apply_update(blocks: &mut [Block], update: &BlockUpdate) -> bool {
    match blocks.iter_mut().find(|b| b.id == update.id) {
        Some(block) => {
            block.content = update.content.clone();
            if let Some(checked) = update.checked {
                block.checked = Some(checked);
            }
            true
        }
        None => false,
    }
}

/// Remove a block by id
pub fn remove_block(blocks: &mut Vec<Block>, id: &str) -> bool {
    let before = blocks.len();
    blocks.retain(|b| b.id != id);
    blocks.len() != before
}

/// (done, total) over to-do blocks
pub fn completion_summary(blocks: &[Block]) -> (usize, usize) {
    let todos = blocks.iter().filter(|b| b.is_todo());
    let (done, total) = todos.fold((0, 0), |(done, total), b| {
        (done + usize::from(b.is_checked()), total + 1)
    });
    (done, total)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_update_block(store: &PageStore, update: &BlockUpdate) {
    let applied = apply_update(&mut store.blocks().write(), update);
    if applied {
        log::info!("[STORE] updated block {}", update.id);
    } else {
        log::warn!("[STORE] update for unknown block {}", update.id);
    }
}

pub fn store_remove_block(store: &PageStore, id: &str) {
    if remove_block(&mut store.blocks().write(), id) {
        log::info!("[STORE] removed block {}", id);
    } else {
        log::warn!("[STORE] delete for unknown block {}", id);
    }
}

pub fn store_add_block(store: &PageStore, block: Block) {
    log::info!("[STORE] added block {}", block.id);
    store.blocks().write().push(block);
}

/// Current snapshot of one block
pub fn store_find_block(store: &PageStore, id: &str) -> Option<Block> {
    store.blocks().read().iter().find(|b| b.id == id).cloned()
}

/// To-do blocks in page order
pub fn store_todo_blocks(store: &PageStore) -> Vec<Block> {
    store.blocks().read().iter().filter(|b| b.is_todo()).cloned().collect()
}

pub fn store_completion_summary(store: &PageStore) -> (usize, usize) {
    completion_summary(&store.blocks().read())
}
