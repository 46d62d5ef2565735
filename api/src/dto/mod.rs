//! Request and response types for the HTTP surface.

pub mod error;
pub mod verification;

pub use error::ErrorResponse;
pub use verification::{
    SendCodeRequest, SendCodeResponse, VerifyCodeQuery, VerifyCodeResponse,
};
