//! CORS middleware configuration for cross-origin requests.
//!
//! Permissive in development; in production only origins listed in
//! `ALLOWED_ORIGINS` (comma-separated) may call the API.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current
/// environment.
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
        ])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    tracing::info!("configuring CORS for production environment");

    let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age);

    for origin in allowed_origins.split(',').filter(|o| !o.trim().is_empty()) {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}
