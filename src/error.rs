//! Error types for the worked-time engine.
//!
//! The calculation path is total and never fails; errors only arise while
//! loading configuration or parsing a contract base supplied by a caller.

use thiserror::Error;

/// The main error type for the worked-time engine.
///
/// # Example
///
/// ```
/// use jardinerie_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/limits.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/limits.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A contract base outside the supported set was supplied.
    #[error("Unsupported contract base: {hours}h (expected 24, 32, 35 or 39)")]
    UnsupportedContractBase {
        /// The weekly hours that were supplied.
        hours: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
