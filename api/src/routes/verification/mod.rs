//! Verification route handlers
//!
//! Two operations: issuing a code to an identity and verifying a
//! submitted code. Malformed requests are rejected here, before the
//! store is consulted.

pub mod send_code;
pub mod verify_code;

pub use send_code::AppState;
