//! Leaflet Map Bindings
//!
//! Minimal `L.*` surface used by the recycling-center map.

use eco_core::{LatLng, CENTERS, DEFAULT_CENTER, DEFAULT_ZOOM, LOCATED_ZOOM, TILE_ATTRIBUTION, TILE_URL, YOU_ARE_HERE};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::has_global;

#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Marker;
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| format!("Failed to serialize: {}", e))
}

fn add_marker(map: &LeafletMap, position: LatLng, popup: &str) -> Result<Marker, String> {
    let marker = marker(&to_js(&position)?);
    marker.add_to(map);
    Ok(marker.bind_popup(popup))
}

/// Build the map inside `container_id`.
///
/// Returns false when Leaflet is not loaded or the map could not be created.
pub fn init_map(container_id: &str) -> bool {
    if !has_global("L") {
        log::warn!("Leaflet not loaded, map disabled");
        return false;
    }
    match build_map(container_id) {
        Ok(map) => {
            locate_user(map);
            true
        }
        Err(err) => {
            log::warn!("map init failed: {}", err);
            false
        }
    }
}

fn build_map(container_id: &str) -> Result<LeafletMap, String> {
    let map = leaflet_map(container_id).map_err(|e| format!("{:?}", e))?;
    map.set_view(&to_js(&DEFAULT_CENTER)?, DEFAULT_ZOOM);

    tile_layer(TILE_URL, &to_js(&TileOptions { attribution: TILE_ATTRIBUTION })?).add_to(&map);

    for center in CENTERS {
        add_marker(&map, center.position, &center.popup_html())?;
    }
    log::debug!("map ready with {} centers", CENTERS.len());
    Ok(map)
}

/// One-shot geolocation. Denial, errors and missing support are ignored.
fn locate_user(map: LeafletMap) {
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
        return;
    };

    let on_position = Closure::<dyn FnMut(web_sys::Position)>::new(
        move |position: web_sys::Position| {
            let coords = position.coords();
            let here = LatLng(coords.latitude(), coords.longitude());
            let Ok(center) = to_js(&here) else { return };
            map.set_view(&center, LOCATED_ZOOM);
            if let Ok(marker) = add_marker(&map, here, YOU_ARE_HERE) {
                marker.open_popup();
            }
        },
    );

    let _ = geolocation.get_current_position(on_position.as_ref().unchecked_ref());
    on_position.forget();
}
