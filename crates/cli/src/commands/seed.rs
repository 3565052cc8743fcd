//! Seed the database with the built-in sample dataset.

use handcrafted_haven_dashboard::config::database_url_from_env;
use handcrafted_haven_dashboard::db;
use handcrafted_haven_dashboard::seed::{self, PgSeedStore, SeedData, SeedLog};

use super::CommandError;

/// Run the same workflow as `GET /api/seed`, logging to the terminal.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing, the pool cannot
/// connect, or the seed run fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url_from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let data = SeedData::builtin();
    let mut log = SeedLog::new();
    let summary = seed::run(&PgSeedStore::new(&pool), &data, &mut log).await?;

    tracing::info!(
        users = summary.users_inserted,
        products = summary.products_inserted,
        reviews = summary.reviews_inserted,
        "Seed summary"
    );
    Ok(())
}
