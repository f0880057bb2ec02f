//! Unit tests for the access service

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;
use crate::repositories::{MockCategoryRepository, MockVerificationRepository};
use crate::services::access::{AccessDecision, AccessGate, AccessService, DenialReason};

fn category(id: i64, slug: &str, parent_id: Option<i64>, requires_auth: bool) -> Category {
    Category {
        id,
        slug: slug.to_string(),
        name: slug.to_string(),
        parent_id,
        requires_auth,
    }
}

async fn setup() -> (
    AccessService<MockVerificationRepository, MockCategoryRepository>,
    Arc<MockVerificationRepository>,
) {
    let categories = MockCategoryRepository::new()
        .with_category(category(1, "schools", None, false))
        .await
        .with_category(category(3, "free", None, false))
        .await
        .with_category(category(42, "konkuk", Some(1), true))
        .await
        .with_category(category(7, "snu", Some(1), true))
        .await;
    let verifications = Arc::new(MockVerificationRepository::new());
    let service = AccessService::new(verifications.clone(), Arc::new(categories), AccessGate::new(1));
    (service, verifications)
}

async fn verify(repo: &MockVerificationRepository, user: Uuid, school_id: i64) {
    let mut record = VerificationRecord::new_pending(
        user,
        school_id,
        "student@example.ac.kr".to_string(),
        "hash".to_string(),
    );
    record.mark_verified(Utc::now());
    repo.insert(record).await;
}

#[tokio::test]
async fn test_public_board_allows_anonymous() {
    let (service, _) = setup().await;
    let decision = service.check_access("free", None).await.unwrap();
    assert_eq!(decision, AccessDecision::Allowed);
}

#[tokio::test]
async fn test_school_board_denies_anonymous() {
    let (service, _) = setup().await;
    let decision = service.check_access("konkuk", None).await.unwrap();
    assert_eq!(decision, AccessDecision::Denied(DenialReason::Unauthenticated));
}

#[tokio::test]
async fn test_school_board_requires_verification() {
    let (service, verifications) = setup().await;
    let user = Uuid::new_v4();

    let decision = service.check_access("konkuk", Some(user)).await.unwrap();
    assert_eq!(decision, AccessDecision::Denied(DenialReason::NotVerified));

    verify(&verifications, user, 42).await;
    let decision = service.check_access("konkuk", Some(user)).await.unwrap();
    assert_eq!(decision, AccessDecision::Allowed);
}

#[tokio::test]
async fn test_verified_for_different_school() {
    let (service, verifications) = setup().await;
    let user = Uuid::new_v4();
    verify(&verifications, user, 7).await;

    let decision = service.check_access("konkuk", Some(user)).await.unwrap();
    assert_eq!(
        decision,
        AccessDecision::Denied(DenialReason::DifferentSchool {
            verified_school_id: 7
        })
    );
}

#[tokio::test]
async fn test_pending_record_does_not_grant_access() {
    let (service, verifications) = setup().await;
    let user = Uuid::new_v4();
    verifications
        .insert(VerificationRecord::new_pending(
            user,
            42,
            "student@konkuk.ac.kr".to_string(),
            "hash".to_string(),
        ))
        .await;

    let decision = service.check_access("konkuk", Some(user)).await.unwrap();
    assert_eq!(decision, AccessDecision::Denied(DenialReason::NotVerified));
}

#[tokio::test]
async fn test_unknown_board() {
    let (service, _) = setup().await;
    let result = service.check_access("nowhere", None).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
