//! HTTP-level error handling.

pub mod error;

pub use error::{bad_request, handle_domain_error};
