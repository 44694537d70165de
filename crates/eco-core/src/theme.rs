//! Theme Preference
//!
//! Light/dark choice persisted under the `theme` key.

use serde::{Deserialize, Serialize};

use crate::error::EcoResult;
use crate::store::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values fall back to light
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button glyph: the theme a click switches to
    pub fn indicator(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// Read the saved theme, default light
pub fn load_theme<S: KeyValueStore>(store: &S) -> EcoResult<Theme> {
    Ok(store
        .get(THEME_KEY)?
        .map(|value| Theme::from_str(&value))
        .unwrap_or_default())
}

/// Flip `current`, persist and return the new theme
pub fn toggle_theme<S: KeyValueStore>(store: &mut S, current: Theme) -> EcoResult<Theme> {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str())?;
    log::debug!("theme {} -> {}", current.as_str(), next.as_str());
    Ok(next)
}
