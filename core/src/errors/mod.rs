//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Verification outcomes (wrong code, expired code, exhausted attempts,
/// unknown identity) are not errors; they resolve to the boolean result
/// pair the store returns. These variants cover everything else.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Programmer error caught at startup; never produced per-request
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// A record for the key already exists
    #[error("Resource already exists: {resource}")]
    Conflict { resource: String },

    /// Outbound message delivery failed
    #[error("Delivery failed: {message}")]
    Delivery { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
