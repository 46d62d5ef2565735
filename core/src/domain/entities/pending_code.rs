//! Pending verification code entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A one-time code awaiting verification, keyed by identity token.
///
/// At most one record exists per identity at any time: re-issuing a code
/// for an identity that already has one overwrites the record in place
/// rather than creating a second row. The record is removed on successful
/// verification, when the retry budget runs out, or when a verification
/// attempt finds the code expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCode {
    /// Opaque token naming who is being verified (not the delivery address)
    pub identity: String,

    /// The numeric one-time code
    pub code: u64,

    /// Timestamp of creation or of the most recent overwrite
    pub issued_at: DateTime<Utc>,

    /// Failed verification attempts since issuance
    pub attempts: u32,
}

impl PendingCode {
    /// Creates a fresh pending code for an identity.
    pub fn new(identity: impl Into<String>, code: u64) -> Self {
        Self {
            identity: identity.into(),
            code,
            issued_at: Utc::now(),
            attempts: 0,
        }
    }

    /// Whether a submitted code matches the stored one.
    pub fn matches(&self, submitted: u64) -> bool {
        self.code == submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pending_code() {
        let record = PendingCode::new("user-42", 1234);

        assert_eq!(record.identity, "user-42");
        assert_eq!(record.code, 1234);
        assert_eq!(record.attempts, 0);
        assert!(record.matches(1234));
        assert!(!record.matches(4321));
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = PendingCode::new("user-42", 90125);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: PendingCode = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
