//! To-do Page App
//!
//! Owns the page's blocks and answers the to-do widgets' callbacks.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoListBlock;
use crate::config::AppConfig;
use crate::models::{make_block_id, Block, BlockUpdate};
use crate::store::{
    store_add_block, store_completion_summary, store_find_block, store_remove_block,
    store_todo_blocks, store_update_block, use_page_store, PageState,
};

fn new_block_id() -> String {
    let now_ms = js_sys::Date::now() as u64;
    let rand = (js_sys::Math::random() * 1_000_000_000.0) as u64;
    make_block_id(now_ms, rand)
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("[APP] Loading page '{}' with {} blocks", config.title, config.blocks.len());

    let store = Store::new(PageState::new(config.blocks));
    provide_context(store);

    let on_update = Callback::new(move |update: BlockUpdate| store_update_block(&store, &update));
    let on_delete = Callback::new(move |id: String| store_remove_block(&store, &id));
    let placeholder = config.placeholder;

    view! {
        <main class="page">
            <h1 class="page-title">{config.title}</h1>

            <div class="block-list">
                <For
                    each=move || store_todo_blocks(&store)
                    key=|block| block.id.clone()
                    children=move |block: Block| {
                        // Only this widget re-renders when its block changes
                        let id = block.id.clone();
                        let snapshot = Memo::new(move |_| {
                            store_find_block(&store, &id).unwrap_or_else(|| block.clone())
                        });
                        view! {
                            <TodoListBlock
                                block=snapshot
                                on_update=on_update
                                on_delete=on_delete
                                placeholder=placeholder.clone()
                            />
                        }
                    }
                />
            </div>

            <button
                class="add-block-btn"
                on:click=move |_| store_add_block(&store, Block::new_todo(new_block_id()))
            >
                "+ Add a to-do"
            </button>

            <PageSummary />
        </main>
    }
}

/// Completion count under the block list
#[component]
fn PageSummary() -> impl IntoView {
    let store = use_page_store();
    let summary = move || {
        let (done, total) = store_completion_summary(&store);
        format!("{} of {} done", done, total)
    };

    view! { <p class="block-count">{summary}</p> }
}
