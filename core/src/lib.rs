//! # Textcode Core
//!
//! Core business logic and domain layer for the Textcode backend.
//! This crate contains the pending-code entity, the verification state
//! machine, repository and delivery interfaces, and the error types that
//! form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
