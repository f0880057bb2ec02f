//! Board access service: loads the board and the caller's verification, then asks the gate

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CategoryRepository, VerificationRepository};

use super::gate::{AccessDecision, AccessGate, Viewer};

/// Access checks for boards
pub struct AccessService<V, C>
where
    V: VerificationRepository,
    C: CategoryRepository,
{
    verification_repository: Arc<V>,
    category_repository: Arc<C>,
    gate: AccessGate,
}

impl<V, C> AccessService<V, C>
where
    V: VerificationRepository,
    C: CategoryRepository,
{
    pub fn new(
        verification_repository: Arc<V>,
        category_repository: Arc<C>,
        gate: AccessGate,
    ) -> Self {
        Self {
            verification_repository,
            category_repository,
            gate,
        }
    }

    /// Decide whether the caller may enter the board identified by `slug`
    ///
    /// The caller's most recently verified record is the one that counts.
    ///
    /// # Errors
    /// `DomainError::NotFound` when no board has this slug.
    pub async fn check_access(
        &self,
        slug: &str,
        user_id: Option<Uuid>,
    ) -> DomainResult<AccessDecision> {
        let board = self
            .category_repository
            .find_by_slug(slug.trim())
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Board '{}'", slug.trim()),
            })?
            .board_descriptor();

        let viewer = match user_id {
            None => Viewer::Anonymous,
            Some(user_id) if board.requires_auth && self.gate.is_school_board(&board) => {
                let verified = self
                    .verification_repository
                    .find_latest_verified(user_id)
                    .await?;
                Viewer::Authenticated {
                    verified_school_id: verified.map(|r| r.school_id),
                }
            }
            Some(_) => Viewer::Authenticated {
                verified_school_id: None,
            },
        };

        let decision = self.gate.evaluate(&board, &viewer);
        tracing::debug!(
            board_id = board.id,
            allowed = decision.is_allowed(),
            reason = ?decision.denial_reason(),
            "Board access evaluated"
        );
        Ok(decision)
    }
}
