//! Web Storage host

use bridge_core::{HostFailure, KeyValueHost, StorageArea};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

/// `localStorage` / `sessionStorage` behind [`KeyValueHost`].
///
/// The storage object is looked up on every call, so a store that becomes
/// unavailable mid-session fails that call only.
#[derive(Debug, Clone, Copy)]
pub struct WebStorageHost {
    area: StorageArea,
}

impl WebStorageHost {
    pub fn new(area: StorageArea) -> Self {
        Self { area }
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }

    fn storage(&self) -> Result<Storage, HostFailure> {
        let window = web_sys::window().ok_or(HostFailure::Unavailable)?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        // Access can throw (SecurityError) or yield null when disabled
        storage
            .map_err(|_| HostFailure::Unavailable)?
            .ok_or(HostFailure::Unavailable)
    }
}

impl KeyValueHost for WebStorageHost {
    fn get(&self, key: &str) -> Result<Option<String>, HostFailure> {
        self.storage()?
            .get_item(key)
            .map_err(|e| rejected("get", key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostFailure> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| rejected("set", key, e))
    }

    fn remove(&mut self, key: &str) -> Result<(), HostFailure> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| rejected("remove", key, e))
    }
}

fn rejected(op: &'static str, key: &str, error: JsValue) -> HostFailure {
    let reason = match error.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", error),
    };
    HostFailure::Rejected {
        op,
        key: key.to_string(),
        reason,
    }
}
