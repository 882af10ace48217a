pub mod app;
pub mod domain;
pub mod projections;
pub mod routes;
pub mod shared;
pub mod system;

use shared::config::{install, load_config, ClientConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };
    let config = install(config);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log.level().unwrap_or(log::Level::Debug));
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("Falling back to default configuration: {}", e);
    }
    log::info!("Catalog backend: {}", shared::api_utils::api_base());

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
