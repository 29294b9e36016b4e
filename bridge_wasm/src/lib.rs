//! Browser binding for the keyboard and storage bridge
//!
//! Exposes `register_keydown_handler`, `read_value`, `write_value` and
//! `remove_value` to JavaScript, and the same operations to Rust callers
//! through [`register`] and [`storage`].

#![cfg(target_arch = "wasm32")]

mod keyboard;
mod storage;

pub use keyboard::{key_from_event, register, register_js, unregister};
pub use storage::WebStorageHost;

use bridge_core::{Config, StorageArea, StorageError, StorageFacade, StorageKey};
use js_sys::Function;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::new());
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = CONFIG.with(|config| config.borrow().log_level);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger not installed: {}", e)));
    }
}

/// Storage facade over the configured Web Storage area
pub fn storage() -> StorageFacade<WebStorageHost> {
    let area = CONFIG.with(|config| config.borrow().storage_area);
    StorageFacade::new(WebStorageHost::new(area))
}

/// Replace the active configuration
pub fn set_config(config: Config) {
    keyboard::configure(&config);
    log::set_max_level(config.log_level.to_level_filter());
    CONFIG.with(|slot| *slot.borrow_mut() = config);
}

fn to_js(err: StorageError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Configure the bridge from JS (`"local"` or `"session"`)
#[wasm_bindgen]
pub fn configure(storage_area: &str, skip_repeats: bool) -> Result<(), JsValue> {
    let storage_area = StorageArea::from_name(storage_area)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown storage area: {}", storage_area)))?;
    let config = Config {
        storage_area,
        skip_repeats,
        ..CONFIG.with(|config| config.borrow().clone())
    };
    set_config(config);
    Ok(())
}

/// Forward every keydown's `event.key` to `handler`, replacing any earlier handler
#[wasm_bindgen]
pub fn register_keydown_handler(handler: JsValue) -> Result<(), JsValue> {
    let handler: Function = handler
        .dyn_into()
        .map_err(|_| JsValue::from_str("Keydown handler must be a function"))?;
    register_js(handler)?;
    Ok(())
}

/// Stored value for `key`, or `undefined` when absent
#[wasm_bindgen]
pub fn read_value(key: &str) -> Result<Option<String>, JsValue> {
    let key = StorageKey::new(key).map_err(to_js)?;
    Ok(storage().read_value(&key).ok())
}

#[wasm_bindgen]
pub fn write_value(key: &str, value: &str) -> Result<(), JsValue> {
    let key = StorageKey::new(key).map_err(to_js)?;
    storage().write_value(&key, value).map_err(to_js)
}

#[wasm_bindgen]
pub fn remove_value(key: &str) -> Result<(), JsValue> {
    let key = StorageKey::new(key).map_err(to_js)?;
    storage().remove_value(&key).map_err(to_js)
}
