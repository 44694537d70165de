//! Recycling Lookup Table
//!
//! Static item name -> disposal instruction mapping.

/// Recycling guide entries (lowercase item name, instruction)
pub const RECYCLING_GUIDE: &[(&str, &str)] = &[
    ("battery", "🚨 Take to battery recycling center (hazardous waste)"),
    ("pizza box", "📦 If clean: compost. If greasy: trash"),
    ("plastic bottle", "♻️ Rinse and put in plastic recycling"),
    ("glass", "🫙 Rinse and recycle with glass"),
    ("paper", "📄 Recycle if clean and dry"),
];

/// Shown when a search term has no entry
pub const NOT_FOUND_MESSAGE: &str = "❌ Item not found. Try: battery, pizza box, plastic...";

/// Result of a search in the guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found {
        item: String,
        instruction: &'static str,
    },
    NotFound,
}

/// Exact lookup. The term must already be lowercase.
pub fn lookup(term: &str) -> Option<&'static str> {
    RECYCLING_GUIDE
        .iter()
        .find(|(name, _)| *name == term)
        .map(|(_, instruction)| *instruction)
}

/// Lowercase the raw input and look it up. No trimming, no fuzzy matching.
pub fn search(raw: &str) -> LookupOutcome {
    let item = raw.to_lowercase();
    match lookup(&item) {
        Some(instruction) => LookupOutcome::Found { item, instruction },
        None => LookupOutcome::NotFound,
    }
}
