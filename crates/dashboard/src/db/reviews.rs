//! Review repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use handcrafted_haven_core::{ProductId, ReviewId, UserId};

use super::RepositoryError;
use crate::models::Review;

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    user_id: Option<Uuid>,
    author_name: Option<String>,
    content: String,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: ReviewId::new(row.id),
            user_id: row.user_id.map(UserId::new),
            author_name: row.author_name,
            content: row.content,
        }
    }
}

/// Repository for review database operations.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Number of reviews written by a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_by_user(&self, user_id: UserId) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Reviews of a product with their authors' names.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Review>, RepositoryError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r"
            SELECT r.id, r.user_id, u.name AS author_name, r.content
            FROM reviews r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.product_id = $1
            ORDER BY u.name NULLS LAST, r.id
            ",
        )
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
