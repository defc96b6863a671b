//! To-do List Block Component
//!
//! Checkbox plus text. Clicking the text opens an inline editor; right-click
//! opens the block menu. Persistence goes through `on_update`/`on_delete`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use leptos_context_menu::{bind_escape_to_close, create_menu_signals, make_on_contextmenu, select_and_close};

use crate::components::BlockContextMenu;
use crate::models::{Block, BlockUpdate};
use crate::todo_block::{classify_key, menu_action, BlockAction, BlockMenuItem, TodoBlockState};

const DEFAULT_PLACEHOLDER: &str = "To-do";

/// A single editable to-do block
#[component]
pub fn TodoListBlock(
    #[prop(into)] block: Signal<Block>,
    #[prop(into)] on_update: Callback<BlockUpdate>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let (state, set_state) = signal(TodoBlockState::new(&block.get_untracked()));
    let is_editing = Memo::new(move |_| state.with(|s| s.is_editing));
    let placeholder = StoredValue::new(placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()));
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let menu = create_menu_signals();
    bind_escape_to_close(menu);

    // Pick up writes to the block made elsewhere
    Effect::new(move |_| {
        let current = block.get();
        set_state.maybe_update(|s| s.sync_from_block(&current));
    });

    // Focus the editor once it is mounted
    Effect::new(move |_| {
        if let Some(textarea) = input_ref.get() {
            let _ = textarea.focus();
        }
    });

    let dispatch = move |action: BlockAction| match action {
        BlockAction::Update(update) => on_update.run(update),
        BlockAction::Delete(id) => on_delete.run(id),
    };

    let commit = move || {
        let current = block.get_untracked();
        if let Some(action) = set_state.try_update(|s| s.commit(&current)).flatten() {
            dispatch(action);
        }
    };

    let toggle_checked = move || {
        let current = block.get_untracked();
        if let Some(action) = set_state.try_update(|s| s.toggle_checked(&current)) {
            dispatch(action);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = classify_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) else {
            return;
        };
        ev.prevent_default();
        let current = block.get_untracked();
        if let Some(action) = set_state.try_update(|s| s.handle_key(key, &current)).flatten() {
            dispatch(action);
        }
    };

    let on_input = move |ev: web_sys::Event| {
        let textarea = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlTextAreaElement>().ok());
        if let Some(textarea) = textarea {
            set_state.update(|s| s.set_content(textarea.value()));
        }
    };

    let on_select = move |item: BlockMenuItem| {
        if let Some(action) = select_and_close(&menu, menu_action(item, &block.get_untracked())) {
            dispatch(action);
        }
    };

    let text_class = move || {
        if state.with(|s| s.checked) { "todo-text checked" } else { "todo-text" }
    };

    view! {
        {move || if is_editing.get() {
            view! {
                <div class="todo-block editing">
                    // Keep focus in the editor so toggling does not end the edit
                    <input
                        type="checkbox"
                        class="todo-checkbox"
                        prop:checked=move || state.with(|s| s.checked)
                        on:mousedown=move |ev| ev.prevent_default()
                        on:change=move |_| toggle_checked()
                    />
                    <textarea
                        node_ref=input_ref
                        class=text_class
                        rows="1"
                        placeholder=placeholder.get_value()
                        prop:value=move || state.with(|s| s.content.clone())
                        on:input=on_input
                        on:keydown=on_keydown
                        on:blur=move |_| commit()
                    ></textarea>
                </div>
            }.into_any()
        } else {
            view! {
                <div
                    class="todo-block"
                    on:click=move |_| set_state.update(|s| s.begin_edit())
                    on:contextmenu=make_on_contextmenu(menu)
                >
                    <input
                        type="checkbox"
                        class="todo-checkbox"
                        prop:checked=move || state.with(|s| s.checked)
                        on:click=move |ev| ev.stop_propagation()
                        on:change=move |ev| {
                            ev.stop_propagation();
                            toggle_checked();
                        }
                    />
                    <div class=text_class>
                        {move || {
                            let content = state.with(|s| s.content.clone());
                            if content.is_empty() {
                                view! { <span class="todo-placeholder">{placeholder.get_value()}</span> }.into_any()
                            } else {
                                view! { <span class="todo-content">{content}</span> }.into_any()
                            }
                        }}
                    </div>
                </div>
            }.into_any()
        }}

        <BlockContextMenu menu=menu on_select=on_select />
    }
}
