//! UI Components
//!
//! Reusable Leptos components.

mod todo_list_block;
mod block_context_menu;

pub use todo_list_block::TodoListBlock;
pub use block_context_menu::BlockContextMenu;
