//! To-do Block State
//!
//! Local state of a single to-do widget. Methods return the callback the
//! widget must fire, if any; the component owns the actual calls.

use crate::models::{Block, BlockUpdate};

/// Callback to fire on the parent
#[derive(Debug, Clone, PartialEq)]
pub enum BlockAction {
    Update(BlockUpdate),
    Delete(String),
}

/// Keys with meaning inside the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Ctrl/Cmd + Enter
    Commit,
    /// Escape
    Cancel,
}

pub fn classify_key(key: &str, ctrl: bool, meta: bool) -> Option<EditKey> {
    match key {
        "Enter" if ctrl || meta => Some(EditKey::Commit),
        "Escape" => Some(EditKey::Cancel),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoBlockState {
    pub is_editing: bool,
    pub content: String,
    pub checked: bool,
    /// Block fields as of the last sync, to detect external writes
    seen_content: String,
    seen_checked: bool,
}

impl TodoBlockState {
    pub fn new(block: &Block) -> Self {
        Self {
            is_editing: false,
            content: block.content.clone(),
            checked: block.is_checked(),
            seen_content: block.content.clone(),
            seen_checked: block.is_checked(),
        }
    }

    pub fn begin_edit(&mut self) {
        if !self.is_editing {
            log::debug!("[TODO] editing");
            self.is_editing = true;
        }
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Leave edit mode; persist only when the buffer differs from the block
    pub fn commit(&mut self, block: &Block) -> Option<BlockAction> {
        if !self.is_editing {
            return None;
        }
        self.is_editing = false;
        if self.content == block.content {
            return None;
        }
        log::debug!("[TODO] commit {}", block.id);
        Some(BlockAction::Update(BlockUpdate {
            id: block.id.clone(),
            content: self.content.clone(),
            checked: Some(self.checked),
        }))
    }

    /// Leave edit mode and drop the buffer
    pub fn cancel(&mut self, block: &Block) {
        if !self.is_editing {
            return;
        }
        log::debug!("[TODO] cancel {}", block.id);
        self.content = block.content.clone();
        self.is_editing = false;
    }

    pub fn handle_key(&mut self, key: EditKey, block: &Block) -> Option<BlockAction> {
        match key {
            EditKey::Commit => self.commit(block),
            EditKey::Cancel => {
                self.cancel(block);
                None
            }
        }
    }

    /// Flip the flag and persist it with the current buffer, in either mode
    pub fn toggle_checked(&mut self, block: &Block) -> BlockAction {
        self.checked = !self.checked;
        log::debug!("[TODO] {} checked={}", block.id, self.checked);
        BlockAction::Update(BlockUpdate {
            id: block.id.clone(),
            content: self.content.clone(),
            checked: Some(self.checked),
        })
    }

    /// Adopt the block's fields if they changed since the last sync.
    /// Returns whether local state was touched.
    pub fn sync_from_block(&mut self, block: &Block) -> bool {
        let checked = block.is_checked();
        if block.content == self.seen_content && checked == self.seen_checked {
            return false;
        }
        self.seen_content = block.content.clone();
        self.seen_checked = checked;
        self.content = block.content.clone();
        self.checked = checked;
        true
    }
}

/// Entries of the block context menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMenuItem {
    Comment,
    SuggestEdits,
    Delete,
    Duplicate,
    CopyLink,
    MoveTo,
}

impl BlockMenuItem {
    pub const ALL: [BlockMenuItem; 6] = [
        BlockMenuItem::Comment,
        BlockMenuItem::SuggestEdits,
        BlockMenuItem::Delete,
        BlockMenuItem::Duplicate,
        BlockMenuItem::CopyLink,
        BlockMenuItem::MoveTo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlockMenuItem::Comment => "Comment",
            BlockMenuItem::SuggestEdits => "Suggest edits",
            BlockMenuItem::Delete => "Delete",
            BlockMenuItem::Duplicate => "Duplicate",
            BlockMenuItem::CopyLink => "Copy link to block",
            BlockMenuItem::MoveTo => "Move to",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BlockMenuItem::Comment => "💬",
            BlockMenuItem::SuggestEdits => "✎",
            BlockMenuItem::Delete => "🗑",
            BlockMenuItem::Duplicate => "⧉",
            BlockMenuItem::CopyLink => "🔗",
            BlockMenuItem::MoveTo => "➜",
        }
    }

    /// What selecting the entry does; placeholders do nothing
    pub fn command(&self) -> Option<MenuCommand> {
        match self {
            BlockMenuItem::Delete => Some(MenuCommand::Delete),
            _ => None,
        }
    }

    pub fn is_wired(&self) -> bool {
        self.command().is_some()
    }
}

/// Behavior behind a wired menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Delete,
}

/// Action for a selected menu entry
pub fn menu_action(item: BlockMenuItem, block: &Block) -> Option<BlockAction> {
    item.command().map(|command| match command {
        MenuCommand::Delete => BlockAction::Delete(block.id.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_block(content: &str, checked: Option<bool>) -> Block {
        Block {
            checked,
            content: content.to_string(),
            ..Block::new_todo("b1".to_string())
        }
    }

    fn update(content: &str, checked: bool) -> BlockAction {
        BlockAction::Update(BlockUpdate {
            id: "b1".to_string(),
            content: content.to_string(),
            checked: Some(checked),
        })
    }

    #[test]
    fn test_new_mirrors_block() {
        let state = TodoBlockState::new(&make_block("Water plants", None));
        assert!(!state.is_editing);
        assert_eq!(state.content, "Water plants");
        assert!(!state.checked);
    }

    #[test]
    fn test_toggle_in_display_mode() {
        let block = make_block("Water plants", Some(false));
        let mut state = TodoBlockState::new(&block);

        assert_eq!(state.toggle_checked(&block), update("Water plants", true));
        assert_eq!(state.toggle_checked(&block), update("Water plants", false));
        assert!(!state.is_editing);
    }

    #[test]
    fn test_toggle_while_editing_sends_buffer_and_keeps_editing() {
        let block = make_block("Water plants", Some(false));
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();
        state.set_content("Water all plants".to_string());

        assert_eq!(state.toggle_checked(&block), update("Water all plants", true));
        assert!(state.is_editing);
    }

    #[test]
    fn test_blur_without_change_does_not_persist() {
        let block = make_block("Water plants", None);
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();

        assert_eq!(state.commit(&block), None);
        assert!(!state.is_editing);
    }

    #[test]
    fn test_blur_after_change_persists() {
        let block = make_block("Water plants", Some(true));
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();
        state.set_content("Water the plants".to_string());

        assert_eq!(state.commit(&block), Some(update("Water the plants", true)));
        assert!(!state.is_editing);
    }

    #[test]
    fn test_edit_back_to_original_does_not_persist() {
        let block = make_block("abc", None);
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();
        state.set_content("abcd".to_string());
        state.set_content("abc".to_string());

        assert_eq!(state.commit(&block), None);
    }

    #[test]
    fn test_escape_restores_and_does_not_persist() {
        let block = make_block("Water plants", None);
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();
        state.set_content("Something else".to_string());

        assert_eq!(state.handle_key(EditKey::Cancel, &block), None);
        assert!(!state.is_editing);
        assert_eq!(state.content, "Water plants");
    }

    #[test]
    fn test_commit_combo_persists_once() {
        let block = make_block("a", None);
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();
        state.set_content("ab".to_string());

        assert_eq!(state.handle_key(EditKey::Commit, &block), Some(update("ab", false)));
        // The editor unmounts and may still report a blur
        assert_eq!(state.commit(&block), None);
    }

    #[test]
    fn test_blur_after_escape_does_not_persist() {
        let block = make_block("a", None);
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();
        state.set_content("b".to_string());
        state.cancel(&block);

        assert_eq!(state.commit(&block), None);
        assert_eq!(state.content, "a");
    }

    #[test]
    fn test_classify_key() {
        assert_eq!(classify_key("Enter", true, false), Some(EditKey::Commit));
        assert_eq!(classify_key("Enter", false, true), Some(EditKey::Commit));
        assert_eq!(classify_key("Enter", false, false), None);
        assert_eq!(classify_key("Escape", false, false), Some(EditKey::Cancel));
        assert_eq!(classify_key("a", true, true), None);
    }

    #[test]
    fn test_external_change_is_adopted() {
        let block = make_block("old", Some(false));
        let mut state = TodoBlockState::new(&block);

        let remote = make_block("new", Some(true));
        assert!(state.sync_from_block(&remote));
        assert_eq!(state.content, "new");
        assert!(state.checked);
    }

    #[test]
    fn test_external_change_replaces_draft_while_editing() {
        let block = make_block("old", Some(false));
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();
        state.set_content("draft".to_string());

        let remote = make_block("edited elsewhere", Some(true));
        assert!(state.sync_from_block(&remote));
        assert_eq!(state.content, "edited elsewhere");
        assert!(state.checked);
        assert!(state.is_editing);
    }

    #[test]
    fn test_unchanged_snapshot_keeps_buffer() {
        let block = make_block("old", Some(false));
        let mut state = TodoBlockState::new(&block);
        state.begin_edit();
        state.set_content("draft".to_string());

        assert!(!state.sync_from_block(&block.clone()));
        assert_eq!(state.content, "draft");
        assert!(state.is_editing);
    }

    #[test]
    fn test_none_and_false_are_the_same_flag() {
        let block = make_block("x", None);
        let mut state = TodoBlockState::new(&block);
        assert!(!state.sync_from_block(&make_block("x", Some(false))));
    }

    #[test]
    fn test_own_toggle_round_trip() {
        let block = make_block("x", Some(false));
        let mut state = TodoBlockState::new(&block);
        state.toggle_checked(&block);

        // Parent stores the update and hands back the new snapshot
        let stored = make_block("x", Some(true));
        state.sync_from_block(&stored);
        assert!(state.checked);
        assert_eq!(state.content, "x");
    }

    #[test]
    fn test_delete_menu_action() {
        let block = make_block("x", None);
        assert_eq!(
            menu_action(BlockMenuItem::Delete, &block),
            Some(BlockAction::Delete("b1".to_string()))
        );
    }

    #[test]
    fn test_placeholder_items_do_nothing() {
        let block = make_block("x", None);
        for item in BlockMenuItem::ALL {
            if item != BlockMenuItem::Delete {
                assert_eq!(menu_action(item, &block), None, "{:?}", item);
                assert!(!item.is_wired());
            }
        }
    }

    #[test]
    fn test_wired_items_match_actions() {
        let block = make_block("x", None);
        for item in BlockMenuItem::ALL {
            assert_eq!(item.is_wired(), menu_action(item, &block).is_some(), "{:?}", item);
        }
    }

    #[test]
    fn test_selecting_delete_closes_menu() {
        use leptos::prelude::*;
        use leptos_context_menu::{create_menu_signals, select_and_close, MenuPosition};

        Owner::new().with(|| {
            let block = make_block("x", None);
            let menu = create_menu_signals();
            menu.position_write.set(Some(MenuPosition { x: 30, y: 40 }));

            let action = select_and_close(&menu, menu_action(BlockMenuItem::Delete, &block));
            assert_eq!(action, Some(BlockAction::Delete("b1".to_string())));
            assert_eq!(menu.position_read.get_untracked(), None);
        });
    }

    #[test]
    fn test_selecting_placeholder_keeps_menu_open() {
        use leptos::prelude::*;
        use leptos_context_menu::{create_menu_signals, select_and_close, MenuPosition};

        Owner::new().with(|| {
            let block = make_block("x", None);
            let menu = create_menu_signals();
            let open = Some(MenuPosition { x: 30, y: 40 });
            menu.position_write.set(open);

            for item in BlockMenuItem::ALL.into_iter().filter(|i| !i.is_wired()) {
                assert_eq!(select_and_close(&menu, menu_action(item, &block)), None);
                assert_eq!(menu.position_read.get_untracked(), open, "{:?}", item);
            }
        });
    }

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = BlockMenuItem::ALL.iter().map(|i| i.label()).collect();
        assert_eq!(
            labels,
            ["Comment", "Suggest edits", "Delete", "Duplicate", "Copy link to block", "Move to"]
        );
    }
}
