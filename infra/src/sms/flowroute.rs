//! Flowroute SMS sender implementation
//!
//! Sends messages through the Flowroute v2 REST API using basic auth.
//! Retries transient failures (rate limiting, 5xx) with exponential
//! backoff; client errors are not retried.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use tc_core::errors::{DomainError, DomainResult};
use tc_core::services::verification::CodeSender;

use crate::sms::sender::mask_recipient;
use crate::InfrastructureError;

const FLOWROUTE_MESSAGES_URL: &str = "https://api.flowroute.com/v2/messages";

/// Flowroute sender configuration
#[derive(Debug, Clone)]
pub struct FlowrouteConfig {
    /// Flowroute access key (basic-auth username)
    pub access_key: String,
    /// Flowroute secret key (basic-auth password)
    pub secret_key: String,
    /// Sending phone number
    pub from_number: String,
    /// Maximum attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for FlowrouteConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            from_number: String::new(),
            max_retries: 3,
            retry_delay_ms: 1000,
            request_timeout_secs: 30,
        }
    }
}

impl FlowrouteConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let access_key = std::env::var("SMS_ACCESS_KEY")
            .map_err(|_| InfrastructureError::Config("SMS_ACCESS_KEY not set".to_string()))?;
        let secret_key = std::env::var("SMS_SECRET_KEY")
            .map_err(|_| InfrastructureError::Config("SMS_SECRET_KEY not set".to_string()))?;
        let from_number = std::env::var("SMS_FROM_NUMBER")
            .map_err(|_| InfrastructureError::Config("SMS_FROM_NUMBER not set".to_string()))?;

        Ok(Self {
            access_key,
            secret_key,
            from_number,
            max_retries: std::env::var("SMS_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: std::env::var("SMS_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Flowroute SMS sender
pub struct FlowrouteSender {
    client: reqwest::Client,
    config: FlowrouteConfig,
}

impl FlowrouteSender {
    /// Create a new Flowroute sender
    pub fn new(config: FlowrouteConfig) -> Result<Self, InfrastructureError> {
        if config.access_key.is_empty() || config.secret_key.is_empty() {
            return Err(InfrastructureError::Config(
                "Flowroute credentials are not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        info!(
            from = %mask_recipient(&config.from_number),
            "Flowroute sender initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(FlowrouteConfig::from_env()?)
    }

    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.config.access_key, self.config.secret_key);
        format!("Basic {}", STANDARD.encode(credentials))
    }

    /// Send with bounded retry and exponential backoff
    async fn send_with_retry(&self, to: &str, body: &str) -> Result<String, InfrastructureError> {
        let payload = json!({
            "to": to,
            "from": self.config.from_number,
            "content": body,
        });

        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                attempt = attempts,
                max = self.config.max_retries,
                to = %mask_recipient(to),
                "sending SMS via Flowroute"
            );

            let response = self
                .client
                .post(FLOWROUTE_MESSAGES_URL)
                .header(reqwest::header::AUTHORIZATION, self.auth_header())
                .json(&payload)
                .send()
                .await;

            match response {
                Ok(response) if response.status().is_success() => {
                    let message_id = response
                        .json::<serde_json::Value>()
                        .await
                        .ok()
                        .and_then(|v| {
                            v.pointer("/data/id")
                                .and_then(|id| id.as_str())
                                .map(str::to_string)
                        })
                        .unwrap_or_else(|| format!("flowroute_{}", Uuid::new_v4()));

                    info!(
                        to = %mask_recipient(to),
                        message_id = %message_id,
                        "SMS accepted by Flowroute"
                    );
                    return Ok(message_id);
                }
                Ok(response) => {
                    let status = response.status();
                    let retryable = status.as_u16() == 429 || status.is_server_error();

                    error!(
                        status = %status,
                        attempt = attempts,
                        "Flowroute rejected the message"
                    );

                    if !retryable {
                        return Err(InfrastructureError::Sms(format!(
                            "Flowroute rejected the message with status {}",
                            status
                        )));
                    }
                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Sms(format!(
                            "failed to send SMS after {} attempts, last status {}",
                            self.config.max_retries, status
                        )));
                    }
                }
                Err(e) => {
                    error!(error = %e, attempt = attempts, "Flowroute request failed");
                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Http(e));
                    }
                }
            }

            warn!(delay_ms = delay.as_millis() as u64, "retrying SMS send");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl CodeSender for FlowrouteSender {
    async fn send(&self, recipient: &str, body: &str) -> DomainResult<String> {
        self.send_with_retry(recipient, body)
            .await
            .map_err(|e| DomainError::Delivery {
                message: e.to_string(),
            })
    }
}
