//! `PostgreSQL` implementation of [`SeedStore`].

use sqlx::PgPool;

use handcrafted_haven_core::Email;

use super::{SeedProduct, SeedReview, SeedStore, SeedTable, SeedUser};
use crate::db::{RepositoryError, schema};

/// Seeds the marketplace tables through a connection pool.
///
/// Every insert uses `ON CONFLICT DO NOTHING` without a target, so a clash on
/// the primary key or on `users.email` skips the row and reports 0.
pub struct PgSeedStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgSeedStore<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

impl SeedStore for PgSeedStore<'_> {
    async fn ensure_table(&self, table: SeedTable) -> Result<(), RepositoryError> {
        let statements: &[&str] = match table {
            SeedTable::Users => &[schema::UUID_EXTENSION, schema::CREATE_USERS],
            SeedTable::Products => &[schema::CREATE_PRODUCTS],
            SeedTable::Reviews => &[schema::CREATE_REVIEWS],
        };

        schema::apply(self.pool, statements).await?;
        Ok(())
    }

    async fn insert_user(
        &self,
        user: &SeedUser,
        email: &Email,
        password_hash: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO users (id, name, email, password, account_type)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(user.id)
        .bind(user.name)
        .bind(email)
        .bind(password_hash)
        .bind(user.account_type)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn insert_product(&self, product: &SeedProduct) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO products (id, name, image_url, price, description, category, seller_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(product.id)
        .bind(product.name)
        .bind(product.image_url)
        .bind(product.price)
        .bind(product.description)
        .bind(product.category.slug())
        .bind(product.seller_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn insert_review(&self, review: &SeedReview) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO reviews (id, product_id, user_id, content)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(review.id)
        .bind(review.product_id)
        .bind(review.user_id)
        .bind(review.content)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
