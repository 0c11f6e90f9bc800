//! Filament Manager Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod http;
mod loader;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("[Main] Filament Manager starting, API at {}", config.api_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
