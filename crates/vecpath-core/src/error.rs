//! Error handling for vecpath
//!
//! Path operations fail in two ways:
//! - Invalid arguments (bad arrays, counts below a geometric minimum,
//!   malformed role bytes)
//! - Invalid state (querying data that does not exist yet)
//!
//! Flattening overflow is deliberately absent: it degrades the path
//! instead of failing.

use thiserror::Error;

/// Path error type
///
/// Surfaced synchronously by validating operations before they mutate
/// anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An argument was missing, malformed, or below a required minimum
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// The operation is not valid for the current path contents
    #[error("Invalid state: {reason}")]
    InvalidState {
        /// Why the state does not permit the operation.
        reason: String,
    },
}

impl PathError {
    /// Create an invalid-argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create an invalid-state error
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    /// Check whether this is an argument validation failure
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check whether this is a state failure
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

/// Result type alias for path operations.
pub type Result<T> = std::result::Result<T, PathError>;
