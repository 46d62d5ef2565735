//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Textcode
//! backend. It provides concrete implementations for the seams the core
//! crate defines: durable pending-code storage over MySQL and outbound
//! SMS delivery.
//!
//! ## Architecture
//!
//! - **Database**: MySQL pending-code repository using SQLx
//! - **SMS**: Flowroute REST client plus a console mock for development

// Re-export core types for convenience
pub use tc_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// SMS sender module - external delivery providers
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
