//! Shared utilities and common types for the Textcode server
//!
//! This crate provides the configuration types used across the server
//! modules. Every config struct can be built from environment variables
//! via a `from_env` constructor and carries sensible defaults for
//! development.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, Environment, ServerConfig, SmsConfig};
