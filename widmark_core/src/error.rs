//! Error types for the widmark_core library.

use std::io;
use uuid::Uuid;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for widmark_core operations
///
/// The estimator itself never returns one of these; they cover input
/// collection, configuration and presets around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Drink volume or ABV outside the accepted range
    #[error("Invalid drink: {0}")]
    InvalidDrink(String),

    /// Weight or elapsed time outside the accepted range
    #[error("Invalid subject parameters: {0}")]
    InvalidSubject(String),

    /// No drink with this id in the list
    #[error("Drink not found: {0}")]
    DrinkNotFound(Uuid),

    /// No preset with this id in the catalog
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Malformed user-supplied text (drink specs, durations, units)
    #[error("Parse error: {0}")]
    Parse(String),
}
