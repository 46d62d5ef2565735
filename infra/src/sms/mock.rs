//! Mock SMS sender implementation
//!
//! Logs messages instead of sending them; used in development and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use tc_core::errors::{DomainError, DomainResult};
use tc_core::services::verification::CodeSender;

use super::sender::mask_recipient;

/// Mock SMS sender for development and testing
#[derive(Clone)]
pub struct MockSmsSender {
    /// Counter for messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to the console
    console_output: bool,
}

impl MockSmsSender {
    /// Create a new mock sender
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock sender with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeSender for MockSmsSender {
    async fn send(&self, recipient: &str, body: &str) -> DomainResult<String> {
        if self.simulate_failure {
            warn!(
                to = %mask_recipient(recipient),
                "mock SMS sender simulating failure"
            );
            return Err(DomainError::Delivery {
                message: "simulated SMS sending failure".to_string(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS SENDER - MESSAGE #{}", count);
            println!("To: {}", recipient);
            println!("Message ID: {}", message_id);
            println!("Content: {}", body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            to = %mask_recipient(recipient),
            message_id = %message_id,
            "mock SMS delivered"
        );

        Ok(message_id)
    }
}
