//! Generic error envelope

use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned for every failed request
///
/// Deliberately generic: it never names the offending field and never
/// reveals whether an identity has a pending code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(status).json(self)
    }
}
