//! Mock implementations for testing the verification service

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::{DomainError, DomainResult};
use crate::services::verification::traits::CodeSender;

// Capturing sender for tests
pub struct MockCodeSender {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
    pub should_fail: bool,
    counter: AtomicU64,
}

impl MockCodeSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail,
            counter: AtomicU64::new(0),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_body_for(&self, recipient: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == recipient)
            .map(|(_, body)| body.clone())
    }
}

#[async_trait]
impl CodeSender for MockCodeSender {
    async fn send(&self, recipient: &str, body: &str) -> DomainResult<String> {
        if self.should_fail {
            return Err(DomainError::Delivery {
                message: "simulated delivery failure".to_string(),
            });
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), body.to_string()));
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("mock-msg-{}", n))
    }
}
