//! Application route configuration
//!
//! The route table is generic over the delivery and storage seams so the
//! binary can wire production implementations while tests plug in the
//! in-memory ones.

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

use tc_core::repositories::pending_code::PendingCodeRepository;
use tc_core::services::verification::CodeSender;

use crate::handlers::bad_request;
use crate::routes::verification::{send_code, verify_code};

/// Register the health check and verification routes
///
/// Extractor failures (missing or unparseable query parameters and JSON
/// fields) are mapped to the same generic 400 envelope the handlers
/// produce, so the response never says which field was wrong and the
/// store is never reached.
pub fn configure_routes<S, R>(cfg: &mut web::ServiceConfig)
where
    S: CodeSender + 'static,
    R: PendingCodeRepository + 'static,
{
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| InternalError::from_response(err, bad_request()).into()),
    )
    .app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| InternalError::from_response(err, bad_request()).into()),
    )
    .route("/health", web::get().to(health_check))
    .service(
        web::scope("/api/v1/verification")
            .route("/send-code", web::post().to(send_code::send_code::<S, R>))
            .route(
                "/verify-code",
                web::get().to(verify_code::verify_code::<S, R>),
            ),
    );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "textcode-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
