//! Expiration policy for pending codes

use chrono::{DateTime, Duration, Utc};

/// Whether a code issued at `issued_at` is still acceptable under the
/// given expiration window.
///
/// The boundary is inclusive: a check landing exactly at
/// `issued_at + window` still passes. A zero window therefore accepts the
/// code only at the instant of issuance; by the time a remote check
/// arrives it has already lapsed. Expiration is only ever evaluated
/// lazily, on a verification attempt; nothing sweeps expired records in
/// the background.
pub fn is_code_valid(issued_at: DateTime<Utc>, window: Duration) -> bool {
    Utc::now() <= issued_at + window
}
