//! Main verification service implementation

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::entities::pending_code::PendingCode;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::pending_code::PendingCodeRepository;

use super::config::VerificationConfig;
use super::expiry::is_code_valid;
use super::generator::generate_code;
use super::traits::CodeSender;
use super::types::{IssueOutcome, VerificationOutcome};

/// Verification service driving the pending-code lifecycle
///
/// Per identity the record moves through a single pending state and is
/// deleted on consumption, exhaustion, or lazily-detected expiry. All
/// store access for one identity happens under that identity's lock, so
/// a read-check-write sequence never interleaves with a concurrent issue
/// or verify for the same identity while unrelated identities proceed
/// untouched.
pub struct VerificationService<S: CodeSender, R: PendingCodeRepository> {
    /// Outbound delivery
    sender: Arc<S>,
    /// Durable record storage
    repository: Arc<R>,
    /// Validated policy
    config: VerificationConfig,
    /// Per-identity mutexes serializing store access
    identity_locks: RwLock<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: CodeSender, R: PendingCodeRepository> VerificationService<S, R> {
    /// Create a new verification service.
    ///
    /// Validates the policy; a bad code length or retry limit is fatal
    /// here rather than on the request path.
    pub fn new(
        sender: Arc<S>,
        repository: Arc<R>,
        config: VerificationConfig,
    ) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            sender,
            repository,
            config,
            identity_locks: RwLock::new(HashMap::new()),
        })
    }

    /// Issue a code for an identity and deliver it to a recipient address.
    ///
    /// If the identity already has a pending code the record is
    /// overwritten in place with a new code, attempts back to zero, and a fresh
    /// issuance time. Issuing never fails because of an existing record.
    ///
    /// Delivery happens after the record is committed and is not rolled
    /// back on failure: a `Delivery` error leaves the stored code live
    /// until it expires or is overwritten by a re-issue.
    pub async fn issue_code(&self, identity: &str, recipient: &str) -> DomainResult<IssueOutcome> {
        let code = generate_code(self.config.code_length)?;
        let record = PendingCode::new(identity, code);

        {
            let lock = self.lock_for(identity).await;
            let _guard = lock.lock().await;

            match self.repository.create(&record).await {
                Ok(()) => {
                    tracing::info!(identity = identity, event = "code_issued", "stored new pending code");
                }
                Err(DomainError::Conflict { .. }) => {
                    self.repository.replace(&record).await?;
                    tracing::info!(
                        identity = identity,
                        event = "code_replaced",
                        "overwrote existing pending code"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        let body = self.compose_message(code);
        let message_id = self.sender.send(recipient, &body).await.map_err(|e| {
            tracing::warn!(
                identity = identity,
                error = %e,
                event = "delivery_failed",
                "code stored but delivery failed"
            );
            e
        })?;

        Ok(IssueOutcome {
            pending: record,
            message_id,
        })
    }

    /// Verify a submitted code for an identity.
    ///
    /// Resolves every store-level condition into the outcome pair:
    /// unknown identity, lazily-detected expiry, and attempt exhaustion
    /// all come back as denied; a wrong code with budget left comes back
    /// retryable. Errors cross this boundary only for storage failures.
    pub async fn verify_code(
        &self,
        identity: &str,
        submitted: u64,
    ) -> DomainResult<VerificationOutcome> {
        let outcome = {
            let lock = self.lock_for(identity).await;
            let _guard = lock.lock().await;

            match self.repository.find(identity).await? {
                // Never issued, already consumed, or exhausted earlier;
                // the caller cannot tell which.
                None => VerificationOutcome::denied(),
                Some(record) => self.judge_submission(identity, &record, submitted).await?,
            }
        };

        self.prune_lock(identity).await;
        Ok(outcome)
    }

    /// Decide the fate of a live record against a submitted code.
    ///
    /// Runs under the identity's lock; every branch commits its mutation
    /// before returning.
    async fn judge_submission(
        &self,
        identity: &str,
        record: &PendingCode,
        submitted: u64,
    ) -> DomainResult<VerificationOutcome> {
        let outcome =
            if !is_code_valid(record.issued_at, self.config.expiration_window()) {
                self.repository.delete(identity).await?;
                tracing::info!(identity = identity, event = "code_expired", "discarded expired code");
                VerificationOutcome::denied()
            } else if record.matches(submitted) {
                self.repository.delete(identity).await?;
                tracing::info!(identity = identity, event = "code_consumed", "verification succeeded");
                VerificationOutcome::granted()
            } else if record.attempts + 1 >= self.config.retry_limit {
                // The attempt being recorded is the last one allowed.
                self.repository.delete(identity).await?;
                tracing::warn!(
                    identity = identity,
                    attempts = record.attempts + 1,
                    event = "attempts_exhausted",
                    "retry budget spent, code discarded"
                );
                VerificationOutcome::denied()
            } else {
                let updated = self
                    .repository
                    .record_attempt(identity, record.attempts)
                    .await?;
                if !updated {
                    // Another writer (a different process) touched the row
                    // between our read and the guarded update; its count
                    // stands and this attempt is not double-charged.
                    tracing::debug!(
                        identity = identity,
                        event = "attempt_race",
                        "attempt update lost to a concurrent writer"
                    );
                }
                tracing::info!(
                    identity = identity,
                    attempts = record.attempts + 1,
                    event = "code_mismatch",
                    "wrong code, attempts remaining"
                );
                VerificationOutcome::retryable()
            };

        Ok(outcome)
    }

    /// The policy this service was constructed with
    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// Number of live entries in the lock registry, for leak assertions
    #[cfg(test)]
    pub(crate) async fn lock_count(&self) -> usize {
        self.identity_locks.read().await.len()
    }

    /// Message delivered alongside a freshly issued code
    fn compose_message(&self, code: u64) -> String {
        format!(
            "{}\nWelcome to {}! Use this one-time code to complete your sign up.",
            code, self.config.company_name
        )
    }

    /// Fetch or create the mutex serializing access to one identity
    async fn lock_for(&self, identity: &str) -> Arc<Mutex<()>> {
        if let Some(lock) = self.identity_locks.read().await.get(identity) {
            return lock.clone();
        }
        let mut locks = self.identity_locks.write().await;
        locks
            .entry(identity.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop an identity's mutex once nobody holds a handle to it.
    ///
    /// Keeps the registry from growing with every identity ever seen.
    /// The strong-count check runs under the registry write lock, so a
    /// task that has already cloned the mutex keeps it alive and the
    /// entry stays.
    async fn prune_lock(&self, identity: &str) {
        let mut locks = self.identity_locks.write().await;
        if let Some(lock) = locks.get(identity) {
            if Arc::strong_count(lock) == 1 {
                locks.remove(identity);
            }
        }
    }
}
