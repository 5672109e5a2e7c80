pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::{load_config, AppConfig};

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let config = load_config().unwrap_or_else(|e| {
        // logging is not up yet
        web_sys::console::warn_1(&format!("invalid embedded config, using defaults: {}", e).into());
        AppConfig::default()
    });

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    log::info!("starting catalog admin");

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
