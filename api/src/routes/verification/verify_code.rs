//! Handler for GET /api/v1/verification/verify-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use tc_core::repositories::pending_code::PendingCodeRepository;
use tc_core::services::verification::CodeSender;

use crate::dto::{VerifyCodeQuery, VerifyCodeResponse};
use crate::handlers::{bad_request, handle_domain_error};

use super::AppState;

/// Verifies a submitted code for an identity.
///
/// # Query Parameters
///
/// - `identity`: the token the code was issued for
/// - `code`: the submitted code, decimal digits
///
/// # Response
///
/// Always 200 with `{"Authenticated": bool, "Retry": bool}` once the
/// query parses. `Retry` is true only when the code was wrong and
/// attempts remain; an unknown identity, an expired code, and an
/// exhausted one all produce the same `{false, false}` body. A missing
/// parameter or a non-numeric code is a 400 before the store is
/// consulted.
pub async fn verify_code<S, R>(
    state: web::Data<AppState<S, R>>,
    query: web::Query<VerifyCodeQuery>,
) -> HttpResponse
where
    S: CodeSender + 'static,
    R: PendingCodeRepository + 'static,
{
    if query.validate().is_err() {
        return bad_request();
    }

    let Ok(code) = query.code.parse::<u64>() else {
        return bad_request();
    };

    match state
        .verification_service
        .verify_code(&query.identity, code)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(VerifyCodeResponse::from(outcome)),
        Err(error) => handle_domain_error(error),
    }
}
