//! Unit tests for the mock SMS sender

use tc_core::errors::DomainError;
use tc_core::services::verification::CodeSender;

use crate::sms::MockSmsSender;

#[tokio::test]
async fn test_mock_sender_returns_message_id_and_counts() {
    let sender = MockSmsSender::with_options(false, false);

    let id = sender.send("+12065551234", "1234\nhello").await.unwrap();

    assert!(id.starts_with("mock_"));
    assert_eq!(sender.message_count(), 1);

    sender.send("+12065551234", "5678\nhello").await.unwrap();
    assert_eq!(sender.message_count(), 2);
}

#[tokio::test]
async fn test_mock_sender_simulated_failure() {
    let sender = MockSmsSender::with_options(false, true);

    let result = sender.send("+12065551234", "1234\nhello").await;

    assert!(matches!(result, Err(DomainError::Delivery { .. })));
    assert_eq!(sender.message_count(), 0);
}
