//! JavaScript Bindings
//!
//! Wrappers for the optional third-party globals loaded by `index.html`.

mod leaflet;
mod confetti;

use wasm_bindgen::JsValue;

pub use leaflet::init_map;
pub use confetti::show_confetti;

/// Whether `window[name]` is defined
fn has_global(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(name)).ok())
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}
