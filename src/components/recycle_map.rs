//! Recycle Map Component
//!
//! Container for the Leaflet recycling-center map.

use leptos::prelude::*;

use crate::bindings;

const MAP_CONTAINER_ID: &str = "recycleMap";

#[component]
pub fn RecycleMap() -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    // Leaflet needs the element in the document, so wait for the mount.
    // Only one attempt per mount; Leaflet refuses a second init on the same node.
    Effect::new(move |attempted: Option<bool>| {
        if attempted == Some(true) {
            return true;
        }
        if container.get().is_none() {
            return false;
        }
        if !bindings::init_map(MAP_CONTAINER_ID) {
            log::debug!("map left empty");
        }
        true
    });

    view! {
        <div
            id=MAP_CONTAINER_ID
            class="recycle-map"
            style="height: 300px; margin: 20px 0; border-radius: 12px; box-shadow: 0 2px 8px #0002;"
            node_ref=container
        ></div>
    }
}
