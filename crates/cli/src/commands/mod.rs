//! Subcommand implementations.

pub mod migrate;
pub mod seed;

use handcrafted_haven_dashboard::config::ConfigError;
use handcrafted_haven_dashboard::seed::SeedError;
use thiserror::Error;

/// Errors a subcommand can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Seed failed: {0}")]
    Seed(#[from] SeedError),
}
