//! In-memory implementation of CategoryRepository

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;

use super::r#trait::CategoryRepository;

/// Mock category repository seeded through builder helpers
#[derive(Clone, Default)]
pub struct MockCategoryRepository {
    categories: Arc<RwLock<HashMap<i64, Category>>>,
    domains: Arc<RwLock<HashSet<(i64, String)>>>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a category
    pub async fn with_category(self, category: Category) -> Self {
        self.categories.write().await.insert(category.id, category);
        self
    }

    /// Register an email domain for a school
    pub async fn with_domain(self, school_id: i64, domain: &str) -> Self {
        self.domains
            .write()
            .await
            .insert((school_id, domain.to_lowercase()));
        self
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories.values().find(|c| c.slug == slug).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError> {
        Ok(self.categories.read().await.get(&id).cloned())
    }

    async fn is_email_domain_registered(
        &self,
        school_id: i64,
        domain: &str,
    ) -> Result<bool, DomainError> {
        let domains = self.domains.read().await;
        Ok(domains.contains(&(school_id, domain.to_string())))
    }
}
