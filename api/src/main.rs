use actix_web::{web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use tc_api::app::configure_routes;
use tc_api::config::Config;
use tc_api::middleware::cors::create_cors;
use tc_api::routes::verification::AppState;
use tc_core::services::verification::{CodeSender, VerificationService};
use tc_infra::database::{DatabasePool, MySqlPendingCodeRepository};
use tc_infra::sms::create_sender;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(environment = %config.environment, "starting Textcode API server");

    // Database pool and repository
    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(to_io_error)?;
    pool.health_check().await.map_err(to_io_error)?;
    let repository = Arc::new(MySqlPendingCodeRepository::new(pool.inner().clone()));

    // Outbound SMS sender, selected by configuration
    let sender: Arc<Box<dyn CodeSender>> = Arc::new(create_sender(&config.sms));

    // A bad verification policy is fatal here, before the server binds
    let verification_service =
        VerificationService::new(sender, repository, config.verification.clone())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let state = web::Data::new(AppState {
        verification_service: Arc::new(verification_service),
    });

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    tracing::info!(address = %bind_address, "server will bind");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(create_cors())
            .configure(configure_routes::<Box<dyn CodeSender>, MySqlPendingCodeRepository>)
            .default_service(web::route().to(not_found))
    });

    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}

fn to_io_error(e: tc_infra::InfrastructureError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}
