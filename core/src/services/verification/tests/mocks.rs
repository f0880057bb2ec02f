//! Mock implementations and fixtures for testing the verification service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::category::Category;
use crate::repositories::{MockCategoryRepository, MockVerificationRepository};
use crate::services::verification::traits::EmailServiceTrait;
use crate::services::verification::{
    CodeHasher, SchoolVerificationService, VerificationServiceConfig,
};

pub const SECRET: &str = "test-verification-secret";
pub const SCHOOL_BOARDS_PARENT_ID: i64 = 1;
pub const KONKUK_ID: i64 = 42;
pub const SNU_ID: i64 = 7;

/// A sent email: (address, school name, code)
pub type SentEmail = (String, String, String);

// Mock email service recording every code it is asked to send
pub struct MockEmailService {
    pub sent: Arc<Mutex<Vec<SentEmail>>>,
    pub should_fail: bool,
}

impl MockEmailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail,
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
            .find(|(to, _, _)| to == email)
            .map(|(_, _, code)| code.clone())
    }

    pub fn last_sent(&self) -> Option<SentEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(
        &self,
        email: &str,
        school_name: &str,
        code: &str,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("Email provider error".to_string());
        }
        self.sent.lock().unwrap().push((
            email.to_string(),
            school_name.to_string(),
            code.to_string(),
        ));
        Ok(format!("mock-email-{}", uuid::Uuid::new_v4()))
    }
}

pub fn school(id: i64, slug: &str, name: &str) -> Category {
    Category {
        id,
        slug: slug.to_string(),
        name: name.to_string(),
        parent_id: Some(SCHOOL_BOARDS_PARENT_ID),
        requires_auth: true,
    }
}

/// Categories for Konkuk (konkuk.ac.kr) and SNU (snu.ac.kr)
pub async fn seeded_categories() -> MockCategoryRepository {
    MockCategoryRepository::new()
        .with_category(school(KONKUK_ID, "konkuk", "Konkuk University"))
        .await
        .with_category(school(SNU_ID, "snu", "Seoul National University"))
        .await
        .with_domain(KONKUK_ID, "konkuk.ac.kr")
        .await
        .with_domain(SNU_ID, "snu.ac.kr")
        .await
}

pub type TestService =
    SchoolVerificationService<MockVerificationRepository, MockCategoryRepository, MockEmailService>;

pub struct Fixture {
    pub service: TestService,
    pub verifications: Arc<MockVerificationRepository>,
    pub categories: Arc<MockCategoryRepository>,
    pub email: Arc<MockEmailService>,
}

pub async fn fixture_with(
    config: VerificationServiceConfig,
    secret: Option<&str>,
    email_fails: bool,
) -> Fixture {
    let verifications = Arc::new(MockVerificationRepository::new());
    let categories = Arc::new(seeded_categories().await);
    let email = Arc::new(MockEmailService::new(email_fails));
    let service = SchoolVerificationService::new(
        verifications.clone(),
        categories.clone(),
        email.clone(),
        CodeHasher::new(secret.map(str::to_string)),
        config,
    );
    Fixture {
        service,
        verifications,
        categories,
        email,
    }
}

pub async fn fixture() -> Fixture {
    fixture_with(VerificationServiceConfig::default(), Some(SECRET), false).await
}
