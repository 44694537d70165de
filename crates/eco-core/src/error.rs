//! Core Error Type
//!
//! One error enum for every fallible operation in the crate.

use serde::{Deserialize, Serialize};

/// Common result type for core operations
pub type EcoResult<T> = Result<T, EcoError>;

/// Errors raised by store access and challenge tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcoError {
    /// The backing store rejected a read or write
    Storage(String),
    /// No store is available (e.g. storage disabled in the browser)
    StorageUnavailable,
    /// A toggle referenced an id outside the challenge list
    UnknownChallenge(String),
}

impl std::fmt::Display for EcoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EcoError::Storage(msg) => write!(f, "Storage error: {}", msg),
            EcoError::StorageUnavailable => write!(f, "Storage unavailable"),
            EcoError::UnknownChallenge(id) => write!(f, "Unknown challenge: {}", id),
        }
    }
}

impl std::error::Error for EcoError {}
