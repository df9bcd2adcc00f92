//! Error types for the settings crate.
//!
//! Structured errors for roster and configuration persistence.

use std::io;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The roster file is malformed.
    #[error("Malformed roster file: {0}")]
    MalformedRoster(String),

    /// The declared entry count does not match the file contents.
    #[error("Roster declares {declared} entries but contains {actual}")]
    RosterCountMismatch {
        /// Count from the header line.
        declared: usize,
        /// Entries actually present.
        actual: usize,
    },

    /// A roster entry contains a character the format cannot hold.
    #[error("Roster entry {index} contains a line break")]
    UnencodableEntry {
        /// Position of the offending entry.
        index: usize,
    },

    /// The configuration file failed validation after loading.
    #[error("Invalid configuration file: {0}")]
    InvalidConfig(#[from] wheelkit_core::WheelError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
