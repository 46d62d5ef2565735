//! Types for verification service results

use crate::domain::entities::pending_code::PendingCode;

/// Result of issuing a code
#[derive(Debug, Clone)]
pub struct IssueOutcome {
    /// The record that was stored; carries the generated code for
    /// logging and tests. The HTTP layer never echoes it to the caller.
    pub pending: PendingCode,
    /// The delivery provider's message id
    pub message_id: String,
}

/// Result of a verification attempt
///
/// Only three combinations are ever produced: denied, denied-but-retryable,
/// and granted. `authenticated` and `retry` are never both true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Whether the submitted code matched a live pending code
    pub authenticated: bool,
    /// Whether the identity still has attempts left on its pending code
    pub retry: bool,
}

impl VerificationOutcome {
    /// The code matched; the record is gone.
    pub fn granted() -> Self {
        Self {
            authenticated: true,
            retry: false,
        }
    }

    /// No usable record: unknown identity, expired code, or exhausted
    /// attempts. Indistinguishable on purpose.
    pub fn denied() -> Self {
        Self {
            authenticated: false,
            retry: false,
        }
    }

    /// Wrong code, attempts remaining.
    pub fn retryable() -> Self {
        Self {
            authenticated: false,
            retry: true,
        }
    }
}
