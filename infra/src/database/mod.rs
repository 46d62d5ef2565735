//! Database module - MySQL implementations using SQLx
//!
//! Provides connection-pool management and the pending-code repository.

pub mod connection;
pub mod repositories;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use repositories::MySqlPendingCodeRepository;
