//! MySQL pending-code repository
//!
//! Backing table:
//!
//! ```sql
//! CREATE TABLE pending_codes (
//!     identity  VARCHAR(120)    NOT NULL PRIMARY KEY,
//!     code      BIGINT UNSIGNED NOT NULL,
//!     issued_at DATETIME(6)     NOT NULL,
//!     attempts  INT UNSIGNED    NOT NULL DEFAULT 0
//! );
//! ```
//!
//! The primary key enforces the one-record-per-identity invariant at the
//! storage level; `create` surfaces the duplicate-key violation as a
//! conflict so the service can fall back to an in-place overwrite. The
//! attempt counter is only ever advanced through a guarded single-row
//! update, which keeps concurrent writers from counting the same attempt
//! twice even across processes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::{debug, error};

use tc_core::domain::entities::pending_code::PendingCode;
use tc_core::errors::{DomainError, DomainResult};
use tc_core::repositories::pending_code::PendingCodeRepository;

/// Pending-code repository over a MySQL pool
pub struct MySqlPendingCodeRepository {
    pool: MySqlPool,
}

impl MySqlPendingCodeRepository {
    /// Create a new repository over an existing pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn internal(context: &str, e: sqlx::Error) -> DomainError {
        error!(error = %e, "{}", context);
        DomainError::Internal {
            message: format!("{}: {}", context, e),
        }
    }
}

#[async_trait]
impl PendingCodeRepository for MySqlPendingCodeRepository {
    async fn find(&self, identity: &str) -> DomainResult<Option<PendingCode>> {
        let row = sqlx::query(
            r#"
            SELECT identity, code, issued_at, attempts
            FROM pending_codes
            WHERE identity = ?
            "#,
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::internal("failed to load pending code", e))?;

        match row {
            Some(row) => {
                let issued_at: DateTime<Utc> = row
                    .try_get("issued_at")
                    .map_err(|e| Self::internal("failed to read issued_at", e))?;
                Ok(Some(PendingCode {
                    identity: row
                        .try_get("identity")
                        .map_err(|e| Self::internal("failed to read identity", e))?,
                    code: row
                        .try_get("code")
                        .map_err(|e| Self::internal("failed to read code", e))?,
                    issued_at,
                    attempts: row
                        .try_get("attempts")
                        .map_err(|e| Self::internal("failed to read attempts", e))?,
                }))
            }
            None => {
                debug!(identity = identity, "no pending code found");
                Ok(None)
            }
        }
    }

    async fn create(&self, record: &PendingCode) -> DomainResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO pending_codes (identity, code, issued_at, attempts)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.identity)
        .bind(record.code)
        .bind(record.issued_at)
        .bind(record.attempts)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                if e.as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false)
                {
                    return Err(DomainError::Conflict {
                        resource: format!("pending code for {}", record.identity),
                    });
                }
                Err(Self::internal("failed to store pending code", e))
            }
        }
    }

    async fn replace(&self, record: &PendingCode) -> DomainResult<()> {
        sqlx::query(
            r#"
            UPDATE pending_codes
            SET code = ?, issued_at = ?, attempts = ?
            WHERE identity = ?
            "#,
        )
        .bind(record.code)
        .bind(record.issued_at)
        .bind(record.attempts)
        .bind(&record.identity)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::internal("failed to overwrite pending code", e))?;

        debug!(identity = %record.identity, "overwrote pending code");
        Ok(())
    }

    async fn record_attempt(&self, identity: &str, observed_attempts: u32) -> DomainResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE pending_codes
            SET attempts = attempts + 1
            WHERE identity = ? AND attempts = ?
            "#,
        )
        .bind(identity)
        .bind(observed_attempts)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::internal("failed to record attempt", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, identity: &str) -> DomainResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM pending_codes
            WHERE identity = ?
            "#,
        )
        .bind(identity)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::internal("failed to delete pending code", e))?;

        Ok(result.rows_affected() > 0)
    }
}
