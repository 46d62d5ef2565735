//! SMS Sender Module
//!
//! Implementations of the core `CodeSender` seam:
//!
//! - **Flowroute**: production delivery over the Flowroute REST API
//! - **Mock**: console output for development and tests
//!
//! Recipient addresses are masked to their last four characters in every
//! log line.

pub mod flowroute;
pub mod mock;
pub mod sender;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use flowroute::{FlowrouteConfig, FlowrouteSender};
pub use mock::MockSmsSender;
pub use sender::mask_recipient;

use tc_core::services::verification::CodeSender;
use tc_shared::config::SmsConfig;

/// Create an SMS sender based on configuration
///
/// Unknown provider names fall back to the mock sender rather than
/// failing startup; the choice is logged.
pub fn create_sender(config: &SmsConfig) -> Box<dyn CodeSender> {
    match config.provider.as_str() {
        "mock" => Box::new(MockSmsSender::new()),
        "flowroute" => {
            let flowroute_config = FlowrouteConfig {
                access_key: config.access_key.clone(),
                secret_key: config.secret_key.clone(),
                from_number: config.from_number.clone(),
                ..Default::default()
            };
            match FlowrouteSender::new(flowroute_config) {
                Ok(sender) => Box::new(sender),
                Err(e) => {
                    tracing::error!("failed to initialize Flowroute sender: {}", e);
                    tracing::warn!("falling back to mock SMS sender");
                    Box::new(MockSmsSender::new())
                }
            }
        }
        other => {
            tracing::warn!("unknown SMS provider '{}', using mock sender", other);
            Box::new(MockSmsSender::new())
        }
    }
}
