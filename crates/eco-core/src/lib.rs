//! Eco Guide Core
//!
//! Browser-independent logic behind the Eco Guide page.
//! The frontend crate only wires these types to DOM events.

mod error;
mod store;
mod recycling;
mod progress;
mod tracker;
mod decor;
mod theme;
mod map;
mod sign;


pub use error::{EcoError, EcoResult};
pub use store::{KeyValueStore, MemoryStore};
pub use recycling::{lookup, search, LookupOutcome, RECYCLING_GUIDE, NOT_FOUND_MESSAGE};
pub use progress::{classify, motivation, ProgressSnapshot, Tier};
pub use tracker::{ChallengeItem, ProgressTracker, CHECKED_VALUE};
pub use decor::{badge_for, BadgeFactDecorator, Decoration, ECO_FACTS};
pub use theme::{load_theme, toggle_theme, Theme, THEME_KEY};
pub use map::{RecyclingCenter, LatLng, CENTERS, DEFAULT_CENTER, DEFAULT_ZOOM, LOCATED_ZOOM, TILE_URL, TILE_ATTRIBUTION, YOU_ARE_HERE};
pub use sign::{SignSelection, SIGN_WORDS, SIGN_PLACEHOLDER};
