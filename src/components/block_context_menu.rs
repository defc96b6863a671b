//! Block Context Menu Component
//!
//! Right-click menu of block actions, anchored at the cursor.

use leptos::prelude::*;
use leptos_context_menu::{make_on_backdrop_click, make_on_backdrop_contextmenu, menu_style, MenuSignals};

use crate::todo_block::BlockMenuItem;

/// Menu with a transparent backdrop catching click-away
#[component]
pub fn BlockContextMenu(
    menu: MenuSignals,
    #[prop(into)] on_select: Callback<BlockMenuItem>,
) -> impl IntoView {
    let on_backdrop_click = make_on_backdrop_click(menu);
    let on_backdrop_contextmenu = make_on_backdrop_contextmenu(menu);

    view! {
        {move || menu.position_read.get().map(|pos| view! {
            <div
                class="context-menu-backdrop"
                on:click=on_backdrop_click
                on:contextmenu=on_backdrop_contextmenu
            ></div>
            <ul class="context-menu" role="menu" style=menu_style(pos)>
                {BlockMenuItem::ALL.iter().map(|&item| {
                    let class = if item.is_wired() { "context-menu-item" } else { "context-menu-item placeholder" };
                    view! {
                        <li
                            class=class
                            role="menuitem"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_select.run(item);
                            }
                        >
                            <span class="context-menu-icon">{item.icon()}</span>
                            <span class="context-menu-label">{item.label()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        })}
    }
}
