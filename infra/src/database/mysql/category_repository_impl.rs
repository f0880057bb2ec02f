//! MySQL implementation of the CategoryRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use cb_core::domain::entities::category::Category;
use cb_core::errors::DomainError;
use cb_core::repositories::CategoryRepository;

/// MySQL implementation of CategoryRepository
pub struct MySqlCategoryRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    /// Create a new MySQL category repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Category entity
    fn row_to_category(row: &sqlx::mysql::MySqlRow) -> Result<Category, DomainError> {
        let get_err = |field: &str, e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to get {}: {}", field, e),
        };

        Ok(Category {
            id: row.try_get("id").map_err(|e| get_err("id", e))?,
            slug: row.try_get("slug").map_err(|e| get_err("slug", e))?,
            name: row.try_get("name").map_err(|e| get_err("name", e))?,
            parent_id: row
                .try_get::<Option<i64>, _>("parent_id")
                .map_err(|e| get_err("parent_id", e))?,
            requires_auth: row
                .try_get("requires_auth")
                .map_err(|e| get_err("requires_auth", e))?,
        })
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        let query = r#"
            SELECT id, slug, name, parent_id, requires_auth
            FROM categories
            WHERE slug = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find category by slug: {}", e),
            })?;

        row.as_ref().map(Self::row_to_category).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError> {
        let query = r#"
            SELECT id, slug, name, parent_id, requires_auth
            FROM categories
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find category by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_category).transpose()
    }

    async fn is_email_domain_registered(
        &self,
        school_id: i64,
        domain: &str,
    ) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM school_email_domains
                WHERE school_id = ? AND LOWER(domain) = ?
            ) AS registered
        "#;

        let row = sqlx::query(query)
            .bind(school_id)
            .bind(domain.to_lowercase())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to check email domain: {}", e),
            })?;

        let registered: i64 = row.try_get("registered").map_err(|e| DomainError::Internal {
            message: format!("Failed to get domain check result: {}", e),
        })?;

        Ok(registered == 1)
    }
}
