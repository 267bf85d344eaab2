//! Inventur Frontend Entry Point

mod api;
mod app;
mod collection;
mod components;
mod config;
mod context;
mod error;
mod i18n;
mod logging;
mod models;
mod prompt;
mod screens;
mod upload;

use app::App;
use config::PageConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = PageConfig::from_window();
    logging::init(config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
