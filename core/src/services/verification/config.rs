//! Configuration for the verification service

use crate::errors::{DomainError, DomainResult};

/// Default number of digits in a generated code
pub const DEFAULT_CODE_LENGTH: u32 = 4;

/// Default expiration window in seconds (one hour)
pub const DEFAULT_EXPIRATION_SECS: i64 = 3600;

/// Default number of wrong-code attempts tolerated
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Largest supported code length; the upper bound of a longer code would
/// not fit in the u64 the code is stored as
pub const MAX_CODE_LENGTH: u32 = 19;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Number of digits in a generated code
    pub code_length: u32,
    /// Seconds after issuance during which a code remains acceptable
    pub expiration_secs: i64,
    /// Maximum wrong-code attempts before the pending code is invalidated
    pub retry_limit: u32,
    /// Company name interpolated into the delivery message
    pub company_name: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            expiration_secs: DEFAULT_EXPIRATION_SECS,
            retry_limit: DEFAULT_RETRY_LIMIT,
            company_name: "Textcode".to_string(),
        }
    }
}

impl VerificationConfig {
    /// Validate the policy values.
    ///
    /// Called at service construction; a violation is a programming error
    /// surfaced at startup, never a per-request condition. A zero
    /// expiration window is allowed; such codes are expired by the time
    /// any remote check reaches them, which is accepted behavior.
    pub fn validate(&self) -> DomainResult<()> {
        if self.code_length == 0 {
            return Err(DomainError::InvalidConfiguration {
                message: "code length must be positive".to_string(),
            });
        }
        if self.code_length > MAX_CODE_LENGTH {
            return Err(DomainError::InvalidConfiguration {
                message: format!(
                    "code length {} exceeds the supported maximum of {}",
                    self.code_length, MAX_CODE_LENGTH
                ),
            });
        }
        if self.retry_limit == 0 {
            return Err(DomainError::InvalidConfiguration {
                message: "retry limit must be positive".to_string(),
            });
        }
        if self.expiration_secs < 0 {
            return Err(DomainError::InvalidConfiguration {
                message: "expiration window must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// The expiration window as a chrono duration
    pub fn expiration_window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.expiration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(VerificationConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_code_length_is_rejected() {
        let config = VerificationConfig {
            code_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn oversized_code_length_is_rejected() {
        let config = VerificationConfig {
            code_length: MAX_CODE_LENGTH + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn zero_retry_limit_is_rejected() {
        let config = VerificationConfig {
            retry_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn zero_expiration_window_is_allowed() {
        let config = VerificationConfig {
            expiration_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
