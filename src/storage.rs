//! Browser Storage
//!
//! `KeyValueStore` over the origin-scoped `window.localStorage`.

use eco_core::{EcoError, EcoResult, KeyValueStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn local_storage() -> EcoResult<Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(EcoError::StorageUnavailable)
}

fn js_error(err: JsValue) -> EcoError {
    EcoError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Handle to `localStorage`. Looks the storage up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> EcoResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> EcoResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> EcoResult<()> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}
