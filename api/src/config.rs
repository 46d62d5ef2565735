//! Application configuration assembled from environment variables

use serde::{Deserialize, Serialize};

use tc_core::services::verification::VerificationConfig;
use tc_shared::config::{DatabaseConfig, Environment, ServerConfig, SmsConfig};

/// Complete API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub sms: SmsConfig,
    pub environment: Environment,
    #[serde(skip)]
    pub verification: VerificationConfig,
}

impl Config {
    /// Load everything from the environment
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            sms: SmsConfig::from_env(),
            environment: Environment::from_env(),
            verification: verification_config_from_env(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Verification policy from environment variables
///
/// The values are validated when the verification service is constructed;
/// a bad policy aborts startup.
fn verification_config_from_env() -> VerificationConfig {
    let defaults = VerificationConfig::default();
    VerificationConfig {
        code_length: std::env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.code_length),
        expiration_secs: std::env::var("CODE_EXPIRATION_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.expiration_secs),
        retry_limit: std::env::var("RETRIES_ALLOWED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retry_limit),
        company_name: std::env::var("COMPANY_NAME").unwrap_or(defaults.company_name),
    }
}
