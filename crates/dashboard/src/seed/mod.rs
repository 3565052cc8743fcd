//! Idempotent database seeding.
//!
//! Creates the marketplace tables and fills them from [`SeedData`]. Tables
//! are populated strictly in the order users, products, reviews, since each
//! references the ones before it. Every insert skips rows whose key already
//! exists, so a second run reports zero inserted rows for every entity.
//!
//! The run writes its transcript into a caller-owned [`SeedLog`]; two runs in
//! flight never share a collector.

pub mod data;
mod log;
mod postgres;

use std::future::Future;

use thiserror::Error;

use handcrafted_haven_core::Email;

pub use data::{SeedData, SeedProduct, SeedReview, SeedUser};
pub use log::SeedLog;
pub use postgres::PgSeedStore;

use crate::db::RepositoryError;
use crate::services::auth::hash_password;

/// Errors that abort a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The dataset references rows it does not contain.
    #[error("invalid seed data: {0}")]
    InvalidData(String),

    /// A seed user's password could not be hashed.
    #[error("failed to hash password for {email}")]
    PasswordHash { email: String },

    /// A storage operation failed.
    #[error("{operation} failed: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: RepositoryError,
    },
}

/// The tables a seed run creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedTable {
    Users,
    Products,
    Reviews,
}

/// Rows inserted by a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users_inserted: u64,
    pub products_inserted: u64,
    pub reviews_inserted: u64,
}

/// Storage operations the seed workflow needs.
///
/// Each insert returns the number of rows written: 1, or 0 when a row with a
/// conflicting key already exists.
pub trait SeedStore {
    /// Create `table` if it does not exist.
    fn ensure_table(
        &self,
        table: SeedTable,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn insert_user(
        &self,
        user: &SeedUser,
        email: &Email,
        password_hash: &str,
    ) -> impl Future<Output = Result<u64, RepositoryError>> + Send;

    fn insert_product(
        &self,
        product: &SeedProduct,
    ) -> impl Future<Output = Result<u64, RepositoryError>> + Send;

    fn insert_review(
        &self,
        review: &SeedReview,
    ) -> impl Future<Output = Result<u64, RepositoryError>> + Send;
}

/// Run the seed workflow.
///
/// On failure the error is also written to `log`, and nothing about the
/// rows inserted before the failure is reported.
///
/// # Errors
///
/// Returns `SeedError` if the dataset is invalid, a password cannot be
/// hashed, or any storage operation fails. The first failure stops the run.
#[tracing::instrument(skip_all)]
pub async fn run<S>(store: &S, data: &SeedData, log: &mut SeedLog) -> Result<SeedSummary, SeedError>
where
    S: SeedStore + Sync,
{
    log.info("Starting database seed...");

    match seed_all(store, data, log).await {
        Ok(summary) => {
            log.info("Seed complete!");
            Ok(summary)
        }
        Err(e) => {
            log.error("Error during seed:");
            log.error(e.to_string());
            Err(e)
        }
    }
}

async fn seed_all<S>(store: &S, data: &SeedData, log: &mut SeedLog) -> Result<SeedSummary, SeedError>
where
    S: SeedStore + Sync,
{
    data.validate()?;

    let users_inserted = seed_users(store, &data.users, log).await?;
    let products_inserted = seed_products(store, &data.products, log).await?;
    let reviews_inserted = seed_reviews(store, &data.reviews, log).await?;

    Ok(SeedSummary {
        users_inserted,
        products_inserted,
        reviews_inserted,
    })
}

async fn seed_users<S>(store: &S, users: &[SeedUser], log: &mut SeedLog) -> Result<u64, SeedError>
where
    S: SeedStore + Sync,
{
    log.info("Seeding users...");
    store
        .ensure_table(SeedTable::Users)
        .await
        .map_err(storage("create users table"))?;

    let mut inserted = 0;
    for user in users {
        let email = Email::parse(user.email)
            .map_err(|e| SeedError::InvalidData(format!("invalid email {}: {e}", user.email)))?;
        let password_hash = hash_password(user.password).map_err(|_| SeedError::PasswordHash {
            email: email.to_string(),
        })?;
        inserted += store
            .insert_user(user, &email, &password_hash)
            .await
            .map_err(storage("insert user"))?;
    }

    log.info(format!("Users seeding complete. Inserted: {inserted}"));
    Ok(inserted)
}

async fn seed_products<S>(
    store: &S,
    products: &[SeedProduct],
    log: &mut SeedLog,
) -> Result<u64, SeedError>
where
    S: SeedStore + Sync,
{
    log.info("Seeding products...");
    store
        .ensure_table(SeedTable::Products)
        .await
        .map_err(storage("create products table"))?;

    let mut inserted = 0;
    for product in products {
        inserted += store
            .insert_product(product)
            .await
            .map_err(storage("insert product"))?;
    }

    log.info(format!("Products seeding complete. Inserted: {inserted}"));
    Ok(inserted)
}

async fn seed_reviews<S>(
    store: &S,
    reviews: &[SeedReview],
    log: &mut SeedLog,
) -> Result<u64, SeedError>
where
    S: SeedStore + Sync,
{
    log.info("Seeding reviews...");
    store
        .ensure_table(SeedTable::Reviews)
        .await
        .map_err(storage("create reviews table"))?;

    let mut inserted = 0;
    for review in reviews {
        inserted += store
            .insert_review(review)
            .await
            .map_err(storage("insert review"))?;
    }

    log.info(format!("Reviews seeding complete. Inserted: {inserted}"));
    Ok(inserted)
}

fn storage(operation: &'static str) -> impl FnOnce(RepositoryError) -> SeedError {
    move |source| SeedError::Storage { operation, source }
}
