//! Error handling for WheelKit
//!
//! Provides error types for all layers of the wheel simulation:
//! - Configuration errors (geometry parameters, thresholds)
//! - Registry errors (unknown segment ids)
//! - Spin errors (spinning an empty wheel)
//! - Actuator errors (missing or failed rotational driver)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for WheelKit
///
/// Configuration and registry errors are recoverable: the caller is
/// informed and prior state is left unchanged. Actuator errors at
/// initialization are fatal and should abort startup.
#[derive(Error, Debug, Clone)]
pub enum WheelError {
    /// A configuration parameter is invalid
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// A segment id was not found in the registry
    #[error("Segment {id} not found")]
    SegmentNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// A spin was requested with zero segments on the wheel
    #[error("Cannot spin an empty wheel")]
    EmptyWheel,

    /// The rotational actuator failed or is missing
    #[error("Actuator error: {message}")]
    Actuator {
        /// Description of the actuator failure.
        message: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl WheelError {
    /// Create an `InvalidConfiguration` error from a reason string
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        WheelError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        WheelError::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, WheelError::InvalidConfiguration { .. })
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, WheelError::SegmentNotFound { .. })
    }
}

/// Result type using WheelError
pub type Result<T> = std::result::Result<T, WheelError>;
