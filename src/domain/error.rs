//! Error taxonomy shared by every domain type.

use thiserror::Error;

/// Errors raised by domain operations.
///
/// All of them are synchronous and recoverable; the caller decides whether to report,
/// retry with different input, or abort.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Malformed or missing input (blank currency, zero quantity, empty cart, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Arithmetic or comparison between amounts in different currencies.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// A status change that the state machine does not allow.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The requesting user may not perform the change.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DomainError::InvalidArgument(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        DomainError::InvalidState(msg.into())
    }
}
