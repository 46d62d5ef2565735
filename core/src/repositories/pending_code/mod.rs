//! Pending-code repository interface and in-memory implementation.

pub mod memory;
pub mod r#trait;

#[cfg(test)]
mod tests;

pub use memory::InMemoryPendingCodeRepository;
pub use r#trait::PendingCodeRepository;
