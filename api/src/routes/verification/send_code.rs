//! Handler for POST /api/v1/verification/send-code

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use tc_core::repositories::pending_code::PendingCodeRepository;
use tc_core::services::verification::{CodeSender, VerificationService};

use crate::dto::{SendCodeRequest, SendCodeResponse};
use crate::handlers::{bad_request, handle_domain_error};

/// Application state that holds the shared verification service
pub struct AppState<S, R>
where
    S: CodeSender,
    R: PendingCodeRepository,
{
    pub verification_service: Arc<VerificationService<S, R>>,
}

/// Issues a one-time code for an identity and delivers it to the given
/// recipient address.
///
/// # Request Body
///
/// ```json
/// {
///     "identity": "user-42",
///     "recipient": "+12065551234"
/// }
/// ```
///
/// # Response
///
/// 200 with a confirmation message; the code itself is only ever sent
/// out-of-band. Re-issuing for an identity that already has a pending
/// code silently replaces it.
pub async fn send_code<S, R>(
    state: web::Data<AppState<S, R>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    S: CodeSender + 'static,
    R: PendingCodeRepository + 'static,
{
    if request.validate().is_err() {
        return bad_request();
    }

    match state
        .verification_service
        .issue_code(&request.identity, &request.recipient)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                identity = %request.identity,
                message_id = %outcome.message_id,
                "verification code created"
            );
            HttpResponse::Ok().json(SendCodeResponse {
                message: "Verification code created.".to_string(),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
