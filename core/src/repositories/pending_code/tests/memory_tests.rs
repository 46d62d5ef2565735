//! Unit tests for the in-memory pending-code repository

use crate::domain::entities::pending_code::PendingCode;
use crate::errors::DomainError;
use crate::repositories::pending_code::{InMemoryPendingCodeRepository, PendingCodeRepository};

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryPendingCodeRepository::new();
    let record = PendingCode::new("alpha", 4321);

    repo.create(&record).await.unwrap();

    let found = repo.find("alpha").await.unwrap().unwrap();
    assert_eq!(found, record);
    assert!(repo.find("beta").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_conflicts_on_duplicate_identity() {
    let repo = InMemoryPendingCodeRepository::new();
    repo.create(&PendingCode::new("alpha", 1111)).await.unwrap();

    let result = repo.create(&PendingCode::new("alpha", 2222)).await;
    match result {
        Err(DomainError::Conflict { .. }) => {}
        other => panic!("expected conflict, got {:?}", other),
    }

    // The original record is untouched
    let found = repo.find("alpha").await.unwrap().unwrap();
    assert_eq!(found.code, 1111);
}

#[tokio::test]
async fn test_replace_overwrites_in_place() {
    let repo = InMemoryPendingCodeRepository::new();
    repo.create(&PendingCode::new("alpha", 1111)).await.unwrap();
    repo.record_attempt("alpha", 0).await.unwrap();

    repo.replace(&PendingCode::new("alpha", 2222)).await.unwrap();

    let found = repo.find("alpha").await.unwrap().unwrap();
    assert_eq!(found.code, 2222);
    assert_eq!(found.attempts, 0);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_record_attempt_guards_on_observed_count() {
    let repo = InMemoryPendingCodeRepository::new();
    repo.create(&PendingCode::new("alpha", 1111)).await.unwrap();

    assert!(repo.record_attempt("alpha", 0).await.unwrap());
    assert_eq!(repo.find("alpha").await.unwrap().unwrap().attempts, 1);

    // Stale observation loses the race
    assert!(!repo.record_attempt("alpha", 0).await.unwrap());
    assert_eq!(repo.find("alpha").await.unwrap().unwrap().attempts, 1);

    // Unknown identity is a no-op
    assert!(!repo.record_attempt("beta", 0).await.unwrap());
}

#[tokio::test]
async fn test_delete_reports_whether_row_existed() {
    let repo = InMemoryPendingCodeRepository::new();
    repo.create(&PendingCode::new("alpha", 1111)).await.unwrap();

    assert!(repo.delete("alpha").await.unwrap());
    assert!(!repo.delete("alpha").await.unwrap());
    assert!(repo.is_empty().await);
}
