//! Shared fixtures for API tests: in-memory repositories, a recording mailer and token signing

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use cb_api::routes::AppState;
use cb_core::{
    AccessGate, AccessService, Category, CodeHasher, EmailServiceTrait, MockCategoryRepository,
    MockVerificationRepository, SchoolVerificationService, SessionClaims,
    VerificationServiceConfig,
};
use cb_shared::{AppConfig, Environment};

pub const JWT_SECRET: &str = "api-test-jwt-secret";
pub const VERIFICATION_SECRET: &str = "api-test-verification-secret";
pub const SCHOOL_BOARDS_PARENT_ID: i64 = 1;
pub const KONKUK_ID: i64 = 42;
pub const SNU_ID: i64 = 7;

pub type TestState =
    AppState<MockVerificationRepository, MockCategoryRepository, RecordingEmailService>;

#[derive(Default)]
pub struct RecordingEmailService {
    sent: Mutex<Vec<(String, String)>>,
    should_fail: bool,
}

impl RecordingEmailService {
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl EmailServiceTrait for RecordingEmailService {
    async fn send_verification_code(
        &self,
        email: &str,
        _school_name: &str,
        code: &str,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("provider unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        Ok(format!("msg-{}", Uuid::new_v4()))
    }
}

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub config: AppConfig,
    pub verifications: Arc<MockVerificationRepository>,
    pub email: Arc<RecordingEmailService>,
}

pub fn app_config() -> AppConfig {
    let mut config = AppConfig::for_environment(Environment::Development);
    config.auth.jwt.secret = JWT_SECRET.to_string();
    config.verification.secret = Some(VERIFICATION_SECRET.to_string());
    config.verification.school_boards_parent_id = SCHOOL_BOARDS_PARENT_ID;
    config
}

fn category(id: i64, slug: &str, parent_id: Option<i64>, requires_auth: bool) -> Category {
    Category {
        id,
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        parent_id,
        requires_auth,
    }
}

pub async fn seeded_categories() -> MockCategoryRepository {
    MockCategoryRepository::new()
        .with_category(category(SCHOOL_BOARDS_PARENT_ID, "schools", None, false))
        .await
        .with_category(category(KONKUK_ID, "konkuk", Some(SCHOOL_BOARDS_PARENT_ID), true))
        .await
        .with_category(category(SNU_ID, "snu", Some(SCHOOL_BOARDS_PARENT_ID), true))
        .await
        .with_category(category(100, "free", None, false))
        .await
        .with_category(category(101, "members", None, true))
        .await
        .with_domain(KONKUK_ID, "konkuk.ac.kr")
        .await
        .with_domain(SNU_ID, "snu.ac.kr")
        .await
}

pub async fn context_with(email: RecordingEmailService) -> TestContext {
    let config = app_config();
    let verifications = Arc::new(MockVerificationRepository::new());
    let categories = Arc::new(seeded_categories().await);
    let email = Arc::new(email);

    let verification_service = Arc::new(SchoolVerificationService::new(
        verifications.clone(),
        categories.clone(),
        email.clone(),
        CodeHasher::new(config.verification.secret.clone()),
        VerificationServiceConfig::from(&config.verification),
    ));
    let access_service = Arc::new(AccessService::new(
        verifications.clone(),
        categories,
        AccessGate::new(config.verification.school_boards_parent_id),
    ));

    TestContext {
        state: web::Data::new(AppState {
            verification_service,
            access_service,
        }),
        config,
        verifications,
        email,
    }
}

pub async fn context() -> TestContext {
    context_with(RecordingEmailService::default()).await
}

/// Signed bearer header value for `user_id`
pub fn bearer(user_id: Uuid) -> String {
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: None,
        role: Some("authenticated".to_string()),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: Some(chrono::Utc::now().timestamp()),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}
