//! Error types for the longshore work-rules engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine.

use thiserror::Error;

/// The main error type for the engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use longshore_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/2024.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/2024.yaml");
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

    /// A bracket table or contribution rule failed validation.
    #[error("Invalid tax configuration: {message}")]
    InvalidTaxConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// A date string did not parse as an ISO calendar date.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The raw input that failed to parse.
        input: String,
        /// A description of the parse error.
        message: String,
    },

    /// The entry store collaborator reported a failure.
    #[error("Entry store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
