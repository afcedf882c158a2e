//! Error types for the bac_core library.

use crate::person::Sex;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bac_core operations
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

    /// Physical or drink input outside its valid domain
    #[error("Validation error: {0}")]
    Validation(String),

    /// Widmark denominator is zero, so no BAC can be derived
    #[error("BAC undefined: no distribution factor for sex {sex:?} at {weight_kg} kg")]
    UndefinedDistribution { sex: Sex, weight_kg: f64 },
}
