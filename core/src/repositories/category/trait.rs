//! Category repository trait. Categories are owned by the board system; this
//! workflow only reads them.

use async_trait::async_trait;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;

/// Read access to board categories and the email domains registered per school
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find a category by its slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError>;

    /// Find a category by its id
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError>;

    /// Whether `domain` is one of the school's registered email domains
    ///
    /// `domain` is compared exactly; callers pass it lower-cased.
    async fn is_email_domain_registered(
        &self,
        school_id: i64,
        domain: &str,
    ) -> Result<bool, DomainError>;
}
