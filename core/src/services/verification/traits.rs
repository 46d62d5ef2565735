//! Trait for outbound message delivery

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Outbound delivery of a composed message to a recipient address.
///
/// The verification service calls this once per issuance and does not
/// retry on its own; provider-level retry, if any, lives behind the
/// implementation.
#[async_trait]
pub trait CodeSender: Send + Sync {
    /// Deliver `body` to `recipient`, returning the provider's message id.
    async fn send(&self, recipient: &str, body: &str) -> DomainResult<String>;
}

// Allow provider selection at runtime through a boxed sender
#[async_trait]
impl CodeSender for Box<dyn CodeSender> {
    async fn send(&self, recipient: &str, body: &str) -> DomainResult<String> {
        (**self).send(recipient, body).await
    }
}
