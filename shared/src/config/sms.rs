//! Outbound SMS provider configuration

use serde::{Deserialize, Serialize};

/// SMS service configuration
///
/// The provider string selects the concrete sender implementation:
/// `"flowroute"` for the production REST client, `"mock"` for the
/// console sender used in development.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider ("flowroute", "mock")
    pub provider: String,

    /// Provider access key (basic-auth username)
    pub access_key: String,

    /// Provider secret key (basic-auth password)
    pub secret_key: String,

    /// Sending phone number
    pub from_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            access_key: String::new(),
            secret_key: String::new(),
            from_number: "+12065550100".to_string(),
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            access_key: std::env::var("SMS_ACCESS_KEY").unwrap_or_default(),
            secret_key: std::env::var("SMS_SECRET_KEY").unwrap_or_default(),
            from_number: std::env::var("SMS_FROM_NUMBER")
                .unwrap_or_else(|_| "+12065550100".to_string()),
        }
    }
}
