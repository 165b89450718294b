//! Airavata Technologies Site Entry Point

mod app;
mod components;
mod config;
mod content;
mod context;
mod error;
mod models;
mod pages;
mod state;
mod store;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("[APP] Mounting {}", content::COMPANY_NAME);

    mount_to_body(move || view! { <App config=config /> });
}
