//! Integration tests for GET /api/v1/verification/verify-code

use actix_web::{test, web, App};
use std::sync::Arc;

use tc_api::app::configure_routes;
use tc_api::routes::verification::AppState;
use tc_core::domain::entities::pending_code::PendingCode;
use tc_core::repositories::pending_code::{InMemoryPendingCodeRepository, PendingCodeRepository};
use tc_core::services::verification::{VerificationConfig, VerificationService};
use tc_infra::sms::MockSmsSender;

const RETRY_LIMIT: u32 = 3;

fn test_state() -> (
    web::Data<AppState<MockSmsSender, InMemoryPendingCodeRepository>>,
    Arc<InMemoryPendingCodeRepository>,
) {
    let sender = Arc::new(MockSmsSender::with_options(false, false));
    let repository = Arc::new(InMemoryPendingCodeRepository::new());
    let service = VerificationService::new(
        sender,
        repository.clone(),
        VerificationConfig {
            retry_limit: RETRY_LIMIT,
            ..Default::default()
        },
    )
    .unwrap();

    (
        web::Data::new(AppState {
            verification_service: Arc::new(service),
        }),
        repository,
    )
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new().app_data($state.clone()).configure(
                configure_routes::<MockSmsSender, InMemoryPendingCodeRepository>,
            ),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_correct_code_on_last_attempt_authenticates() {
    let (state, repository) = test_state();
    let app = test_app!(state);

    let mut record = PendingCode::new("jjj", 1234);
    record.attempts = RETRY_LIMIT - 1;
    repository.create(&record).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/verification/verify-code?identity=jjj&code=1234")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["Authenticated"], true);
    assert_eq!(body["Retry"], false);
    assert!(repository.is_empty().await);
}

#[actix_rt::test]
async fn test_wrong_code_on_last_attempt_is_denied() {
    let (state, repository) = test_state();
    let app = test_app!(state);

    let mut record = PendingCode::new("aaa", 1234);
    record.attempts = RETRY_LIMIT - 1;
    repository.create(&record).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/verification/verify-code?identity=aaa&code=1111")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["Authenticated"], false);
    assert_eq!(body["Retry"], false);
    assert!(repository.is_empty().await);
}

#[actix_rt::test]
async fn test_wrong_code_with_budget_left_invites_retry() {
    let (state, repository) = test_state();
    let app = test_app!(state);

    let mut record = PendingCode::new("bbb", 1234);
    record.attempts = 1;
    repository.create(&record).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/verification/verify-code?identity=bbb&code=1111")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["Authenticated"], false);
    assert_eq!(body["Retry"], true);
    assert_eq!(
        repository.find("bbb").await.unwrap().unwrap().attempts,
        2
    );
}

#[actix_rt::test]
async fn test_unknown_identity_is_denied() {
    let (state, _repository) = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/verification/verify-code?identity=nobody&code=1234")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["Authenticated"], false);
    assert_eq!(body["Retry"], false);
}

#[actix_rt::test]
async fn test_response_carries_exactly_the_wire_keys() {
    let (state, _repository) = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/verification/verify-code?identity=nobody&code=1234")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("Authenticated"));
    assert!(object.contains_key("Retry"));
}

#[actix_rt::test]
async fn test_non_numeric_code_is_rejected_before_the_store() {
    let (state, repository) = test_state();
    let app = test_app!(state);

    repository
        .create(&PendingCode::new("ccc", 1234))
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v1/verification/verify-code?identity=ccc&code=abcd")
        .to_request();
    let response = test::call_service(&app, req).await;

    assert_eq!(response.status(), 400);
    // The record was never touched
    assert_eq!(repository.find("ccc").await.unwrap().unwrap().attempts, 0);
}

#[actix_rt::test]
async fn test_missing_parameters_are_rejected() {
    let (state, _repository) = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/v1/verification/verify-code?identity=ddd")
        .to_request();
    let response = test::call_service(&app, req).await;
    assert_eq!(response.status(), 400);

    // The envelope is generic and never names the missing field
    let body = test::read_body(response).await;
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "invalid_request");
    assert_eq!(body["message"], "Invalid request");
    assert!(!body.to_string().contains("field"));

    let req = test::TestRequest::get()
        .uri("/api/v1/verification/verify-code?identity=&code=1234")
        .to_request();
    let response = test::call_service(&app, req).await;
    assert_eq!(response.status(), 400);
}
