//! Recycling Map Data
//!
//! Fixed view settings and markers for the recycling-center map.

use serde::Serialize;

/// (latitude, longitude), serialized as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng(pub f64, pub f64);

/// New York City
pub const DEFAULT_CENTER: LatLng = LatLng(40.7128, -74.0060);
pub const DEFAULT_ZOOM: u8 = 12;
/// Zoom used after a successful geolocation
pub const LOCATED_ZOOM: u8 = 13;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

pub const YOU_ARE_HERE: &str = "You are here";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecyclingCenter {
    pub name: &'static str,
    pub position: LatLng,
    /// Accepted material
    pub material: &'static str,
}

impl RecyclingCenter {
    /// Marker popup markup
    pub fn popup_html(&self) -> String {
        format!("<b>{}</b><br>Accepts: {}", self.name, self.material)
    }
}

pub const CENTERS: &[RecyclingCenter] = &[
    RecyclingCenter {
        name: "Green Battery Center",
        position: LatLng(40.715, -74.002),
        material: "battery",
    },
    RecyclingCenter {
        name: "Eco Glass Depot",
        position: LatLng(40.722, -74.01),
        material: "glass",
    },
    RecyclingCenter {
        name: "Plastic Drop-off",
        position: LatLng(40.709, -74.015),
        material: "plastic",
    },
];
