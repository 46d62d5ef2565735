//! In-memory pending-code repository.
//!
//! Backs unit tests and local development; production uses the MySQL
//! implementation from the infrastructure crate.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::pending_code::PendingCode;
use crate::errors::{DomainError, DomainResult};

use super::r#trait::PendingCodeRepository;

/// In-memory repository keyed by identity token
#[derive(Clone, Default)]
pub struct InMemoryPendingCodeRepository {
    records: Arc<RwLock<HashMap<String, PendingCode>>>,
}

impl InMemoryPendingCodeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records, for assertions in tests
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PendingCodeRepository for InMemoryPendingCodeRepository {
    async fn find(&self, identity: &str) -> DomainResult<Option<PendingCode>> {
        Ok(self.records.read().await.get(identity).cloned())
    }

    async fn create(&self, record: &PendingCode) -> DomainResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.identity) {
            return Err(DomainError::Conflict {
                resource: format!("pending code for {}", record.identity),
            });
        }
        records.insert(record.identity.clone(), record.clone());
        Ok(())
    }

    async fn replace(&self, record: &PendingCode) -> DomainResult<()> {
        self.records
            .write()
            .await
            .insert(record.identity.clone(), record.clone());
        Ok(())
    }

    async fn record_attempt(&self, identity: &str, observed_attempts: u32) -> DomainResult<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(identity) {
            Some(record) if record.attempts == observed_attempts => {
                record.attempts += 1;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, identity: &str) -> DomainResult<bool> {
        Ok(self.records.write().await.remove(identity).is_some())
    }
}
