//! Database connection pool management
//!
//! Connection pooling over SQLx with MySQL: pool sizing, timeouts, and a
//! health check used at startup.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use tc_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// MySQL connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new connection pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect(&config.url)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to create database pool");
                InfrastructureError::Database(e)
            })?;

        tracing::info!("database connection pool created");

        Ok(Self { pool })
    }

    /// Verify the database answers a trivial query
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(InfrastructureError::Database)
    }

    /// Access the underlying SQLx pool
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }
}
