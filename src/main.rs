#![allow(warnings)]
//! To-do Block Frontend Entry Point

mod models;
mod config;
mod logging;
mod store;
mod todo_block;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        log::warn!("[CONFIG] Invalid page config, using defaults: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
