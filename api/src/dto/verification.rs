//! Verification endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use tc_core::services::verification::VerificationOutcome;

/// Body of POST /api/v1/verification/send-code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Opaque token naming who is being verified
    #[validate(length(min = 1, max = 120))]
    pub identity: String,

    /// Delivery address the code is sent to
    #[validate(length(min = 1, max = 32))]
    pub recipient: String,
}

/// Query string of GET /api/v1/verification/verify-code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeQuery {
    /// Opaque token naming who is being verified
    #[validate(length(min = 1, max = 120))]
    pub identity: String,

    /// Submitted code, decimal digits
    #[validate(length(min = 1, max = 20))]
    pub code: String,
}

/// Body of a successful send-code response; the code itself is never
/// echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub message: String,
}

/// Body of a verify-code response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyCodeResponse {
    #[serde(rename = "Authenticated")]
    pub authenticated: bool,
    #[serde(rename = "Retry")]
    pub retry: bool,
}

impl From<VerificationOutcome> for VerifyCodeResponse {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            authenticated: outcome.authenticated,
            retry: outcome.retry,
        }
    }
}
