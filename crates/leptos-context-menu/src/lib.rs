//! Leptos Context Menu Utilities
//!
//! Right-click menus anchored at the cursor.
//! Right-clicking again toggles the menu shut; click-away and Escape close it too.

use leptos::prelude::*;

/// Client coordinates where the menu was opened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuPosition {
    pub x: i32,
    pub y: i32,
}

/// Menu state signals
#[derive(Clone, Copy)]
pub struct MenuSignals {
    pub position_read: ReadSignal<Option<MenuPosition>>,
    pub position_write: WriteSignal<Option<MenuPosition>>,
}

pub fn create_menu_signals() -> MenuSignals {
    let (position_read, position_write) = signal(None::<MenuPosition>);
    MenuSignals {
        position_read,
        position_write,
    }
}

/// State after a right-click at (x, y): opens when closed, closes when open
pub fn toggle_position(current: Option<MenuPosition>, x: i32, y: i32) -> Option<MenuPosition> {
    match current {
        Some(_) => None,
        None => Some(MenuPosition { x, y }),
    }
}

/// Inline style placing the menu's top-left corner at the cursor
pub fn menu_style(position: MenuPosition) -> String {
    format!("top: {}px; left: {}px;", position.y, position.x)
}

/// Close the menu. Returns whether it was open.
pub fn close_menu(menu: &MenuSignals) -> bool {
    if menu.position_read.get_untracked().is_none() {
        return false;
    }
    log::debug!("[MENU] closed");
    menu.position_write.set(None);
    true
}

/// Right-click at (x, y) on the menu's owner element
pub fn toggle_menu_at(menu: &MenuSignals, x: i32, y: i32) {
    let next = toggle_position(menu.position_read.get_untracked(), x, y);
    match next {
        Some(pos) => log::debug!("[MENU] opened at ({}, {})", pos.x, pos.y),
        None => log::debug!("[MENU] closed by right-click"),
    }
    menu.position_write.set(next);
}

/// Window keydown while the menu is open. Returns whether it closed the menu.
pub fn on_escape_key(menu: &MenuSignals, key: &str) -> bool {
    key == "Escape" && close_menu(menu)
}

/// Menu entry picked. An entry with an action closes the menu and hands the
/// action back; an entry without one leaves the menu open.
pub fn select_and_close<A>(menu: &MenuSignals, action: Option<A>) -> Option<A> {
    if action.is_some() {
        close_menu(menu);
    }
    action
}

/// Create contextmenu handler for the menu's owner element
/// Suppresses the native menu and toggles ours at the cursor
pub fn make_on_contextmenu(menu: MenuSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        toggle_menu_at(&menu, ev.client_x(), ev.client_y());
    }
}

/// Create click handler for the backdrop behind an open menu
pub fn make_on_backdrop_click(menu: MenuSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        close_menu(&menu);
    }
}

/// Create contextmenu handler for the backdrop (second right-click lands here)
pub fn make_on_backdrop_contextmenu(menu: MenuSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        close_menu(&menu);
    }
}

/// Listen for Escape on the window only while the menu is open
/// Any live listener is removed when the current owner is disposed
pub fn bind_escape_to_close(menu: MenuSignals) {
    let listener = StoredValue::new(None);
    let is_open = Memo::new(move |_| menu.position_read.with(|pos| pos.is_some()));

    let release = move || {
        let mut handle: Option<leptos::leptos_dom::helpers::WindowListenerHandle> = None;
        listener.update_value(|current| handle = current.take());
        if let Some(handle) = handle {
            handle.remove();
        }
    };

    Effect::new(move |_| {
        if is_open.get() {
            let handle = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
                on_escape_key(&menu, &ev.key());
            });
            listener.set_value(Some(handle));
        } else {
            release();
        }
    });
    on_cleanup(release);
}
