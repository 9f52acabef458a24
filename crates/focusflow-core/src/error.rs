//! Core error types for focusflow-core.
//!
//! Errors are handled at the boundary nearest their origin. Validation
//! errors reach the caller of a settings update; persistence read errors
//! and audio errors are recovered locally by the component that hit them.

use thiserror::Error;

/// Core error type for focusflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence-related errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Audio output errors
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A settings or theme field failed validation.
///
/// Raised before any mutation, so the previously accepted values stay in
/// effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("settings record is malformed: {0}")]
    Malformed(String),

    #[error("'{field}' is required")]
    Missing { field: String },

    #[error("'{field}' must be a whole number, got {value}")]
    NotAnInteger { field: String, value: String },

    #[error("'{field}' must be true or false, got {value}")]
    NotABoolean { field: String, value: String },

    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("'{value}' is not a valid {field}")]
    UnknownOption { field: String, value: String },
}

/// Key-value persistence errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Stored record exists but cannot be decoded
    #[error("Stored record '{key}' is unreadable: {message}")]
    Unparseable { key: String, message: String },

    /// Underlying SQLite failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Data directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// The platform cannot supply an audio output right now.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("Audio output unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
