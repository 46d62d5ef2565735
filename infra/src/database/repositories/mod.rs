//! Repository implementations over MySQL.

pub mod pending_code_repository;

pub use pending_code_repository::MySqlPendingCodeRepository;
