use gloo::events::EventListener;
use parking_app::{bind_page, AppError, UiConfig};
use wasm_bindgen::prelude::*;
use web_sys::Document;

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Called by the page once the module is loaded. `config` is an optional
/// object with any of the [`UiConfig`] fields.
#[wasm_bindgen]
pub fn mount(config: JsValue) {
    let config = read_config(config);
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("mount called without a window document");
        return;
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| bind(&target, &config))
            .forget();
    } else {
        bind(&document, &config);
    }
}

fn bind(document: &Document, config: &UiConfig) {
    match bind_page(document, config) {
        Ok(bindings) => bindings.forget(),
        Err(e) => log::error!("Unable to bind page: {e}"),
    }
}

fn read_config(value: JsValue) -> UiConfig {
    if value.is_undefined() || value.is_null() {
        return UiConfig::default();
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| AppError::Config(e.to_string()))
        .unwrap_or_else(|e| {
            log::error!("{e}, using defaults");
            UiConfig::default()
        })
}
