//! Database operations for the marketplace `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `users` - Artisans and customers (login identity, hashed password)
//! - `products` - Listings, each optionally referencing a seller
//! - `reviews` - Free-text reviews referencing a product and an author
//! - `tower_sessions.session` - Session storage (managed by the store)
//!
//! # Schema
//!
//! The three marketplace tables are created with `IF NOT EXISTS` by the seed
//! workflow and by:
//! ```bash
//! cargo run -p handcrafted-haven-cli -- migrate
//! ```

pub mod products;
pub mod reviews;
pub mod schema;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use products::{PRODUCTS_PER_PAGE, ProductFilter, ProductRepository};
pub use reviews::ReviewRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
