//! Route tests for board access checks and the miscellaneous endpoints

mod common;

use actix_web::{http::StatusCode, test, web};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use cb_api::app::create_app;
use cb_api::routes::health::DatabaseHealth;
use cb_core::VerificationRecord;

use common::{bearer, context, KONKUK_ID};

fn verified_record(user_id: Uuid, school_id: i64) -> VerificationRecord {
    let mut record = VerificationRecord::new_pending(
        user_id,
        school_id,
        "student@example.ac.kr".to_string(),
        "0".repeat(64),
    );
    record.mark_verified(Utc::now());
    record
}

#[actix_web::test]
async fn test_public_board_is_open_to_anonymous_callers() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/boards/free/access").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["allowed"], true);
    assert!(body["reason"].is_null());
}

#[actix_web::test]
async fn test_school_board_denies_anonymous_and_unverified_callers() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/boards/konkuk/access").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["allowed"], false);
    assert_eq!(body["reason"], "unauthenticated");

    let req = test::TestRequest::get()
        .uri("/boards/konkuk/access")
        .insert_header(("Authorization", bearer(Uuid::new_v4())))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["allowed"], false);
    assert_eq!(body["reason"], "not_verified");
}

#[actix_web::test]
async fn test_school_board_follows_verified_school() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let user_id = Uuid::new_v4();
    ctx.verifications
        .insert(verified_record(user_id, KONKUK_ID))
        .await;

    let req = test::TestRequest::get()
        .uri("/boards/konkuk/access")
        .insert_header(("Authorization", bearer(user_id)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["allowed"], true);

    let req = test::TestRequest::get()
        .uri("/boards/snu/access")
        .insert_header(("Authorization", bearer(user_id)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["allowed"], false);
    assert_eq!(body["reason"], "different_school");
}

#[actix_web::test]
async fn test_members_board_needs_sign_in_only() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/boards/members/access")
        .insert_header(("Authorization", bearer(Uuid::new_v4())))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["allowed"], true);
}

#[actix_web::test]
async fn test_invalid_token_is_rejected_even_when_optional() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/boards/free/access")
        .insert_header(("Authorization", "Bearer forged"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_unknown_board_returns_404() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/boards/missing/access").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_health_and_fallback_routes() {
    let ctx = context().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "not_configured");

    let req = test::TestRequest::get().uri("/no/such/route").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

struct FixedDatabaseHealth(bool);

#[async_trait]
impl DatabaseHealth for FixedDatabaseHealth {
    async fn is_healthy(&self) -> bool {
        self.0
    }
}

fn database_health(healthy: bool) -> web::Data<dyn DatabaseHealth> {
    let check: Arc<dyn DatabaseHealth> = Arc::new(FixedDatabaseHealth(healthy));
    web::Data::from(check)
}

#[actix_web::test]
async fn test_health_reports_reachable_database() {
    let ctx = context().await;
    let app = test::init_service(
        create_app(ctx.state.clone(), &ctx.config).app_data(database_health(true)),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "up");
}

#[actix_web::test]
async fn test_health_returns_503_when_database_is_down() {
    let ctx = context().await;
    let app = test::init_service(
        create_app(ctx.state.clone(), &ctx.config).app_data(database_health(false)),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "down");
}
