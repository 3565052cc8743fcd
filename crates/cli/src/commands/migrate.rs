//! Schema creation.
//!
//! Every statement is idempotent (`IF NOT EXISTS`), so running this against a
//! database that was already seeded is a no-op.

use handcrafted_haven_dashboard::config::database_url_from_env;
use handcrafted_haven_dashboard::db::{self, schema};
use tower_sessions_sqlx_store::PostgresStore;

use super::CommandError;

/// Create the `users`, `products`, `reviews` and session tables.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing or a statement fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url_from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Creating marketplace tables...");
    schema::apply(&pool, schema::ALL).await?;

    tracing::info!("Creating session table...");
    PostgresStore::new(pool).migrate().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
