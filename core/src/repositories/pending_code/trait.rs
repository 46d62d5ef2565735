//! Repository trait for pending verification codes.

use async_trait::async_trait;

use crate::domain::entities::pending_code::PendingCode;
use crate::errors::DomainResult;

/// Durable key-value storage for pending codes, keyed by identity token.
///
/// The verification service is the only consumer; no other component
/// reads or mutates these records. Implementations must make each call
/// atomic on its own: `record_attempt` in particular is a guarded
/// single-row update so that two concurrent writers cannot both count
/// the same attempt.
#[async_trait]
pub trait PendingCodeRepository: Send + Sync {
    /// Point lookup by identity token.
    async fn find(&self, identity: &str) -> DomainResult<Option<PendingCode>>;

    /// Insert a new record. Fails with `DomainError::Conflict` when a
    /// record for the identity already exists.
    async fn create(&self, record: &PendingCode) -> DomainResult<()>;

    /// Overwrite the existing record for `record.identity` with the given
    /// code, attempt counter, and issuance time.
    async fn replace(&self, record: &PendingCode) -> DomainResult<()>;

    /// Increment the attempt counter by one, guarded by the counter value
    /// the caller observed. Returns `false` when the stored row no longer
    /// carries that value (a concurrent writer got there first) or the
    /// record is gone.
    async fn record_attempt(&self, identity: &str, observed_attempts: u32) -> DomainResult<bool>;

    /// Delete the record for an identity. Returns whether a row was
    /// removed.
    async fn delete(&self, identity: &str) -> DomainResult<bool>;
}
