//! Mapping from domain errors to wire responses

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use tc_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Generic 400 for malformed or incomplete requests
///
/// Used before the store is consulted; the body never says which field
/// was wrong.
pub fn bad_request() -> HttpResponse {
    ErrorResponse::new("invalid_request", "Invalid request").to_response(StatusCode::BAD_REQUEST)
}

/// Convert a domain error into an HTTP response
///
/// Everything the caller sees is generic; details stay in the logs.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    tracing::error!(error = %error, "request failed");

    match error {
        DomainError::Validation { .. } => bad_request(),
        DomainError::Delivery { .. } => {
            ErrorResponse::new("delivery_unavailable", "Message delivery is unavailable")
                .to_response(StatusCode::SERVICE_UNAVAILABLE)
        }
        DomainError::InvalidConfiguration { .. }
        | DomainError::NotFound { .. }
        | DomainError::Conflict { .. }
        | DomainError::Internal { .. } => {
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
