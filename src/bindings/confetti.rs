//! Confetti Effect
//!
//! Celebration burst through canvas-confetti's `window.confetti`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::has_global;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = confetti)]
    fn confetti(options: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfettiOptions {
    particle_count: u32,
    spread: u32,
    origin: Origin,
}

#[derive(Serialize)]
struct Origin {
    y: f64,
}

/// Fire one burst. Skipped when the library is not loaded.
pub fn show_confetti() {
    if !has_global("confetti") {
        log::debug!("confetti not loaded, skipping celebration");
        return;
    }
    let options = ConfettiOptions {
        particle_count: 100,
        spread: 70,
        origin: Origin { y: 0.6 },
    };
    let result = serde_wasm_bindgen::to_value(&options)
        .map_err(|e| JsValue::from_str(&e.to_string()))
        .and_then(|js_options| confetti(&js_options));
    if let Err(err) = result {
        log::warn!("confetti failed: {:?}", err);
    }
}
