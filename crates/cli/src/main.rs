//! Handcrafted Haven CLI - schema and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the marketplace tables and the session table
//! hh-cli migrate
//!
//! # Insert the built-in sample dataset (idempotent)
//! hh-cli seed
//! ```
//!
//! Both commands read `HAVEN_DATABASE_URL` (or `POSTGRES_URL`, then
//! `DATABASE_URL`), loading `.env` first if present.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hh-cli")]
#[command(author, version, about = "Handcrafted Haven CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the marketplace and session tables
    Migrate,
    /// Seed the database with the built-in sample data
    Seed,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), commands::CommandError> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_subcommands() {
        assert!(matches!(
            Cli::try_parse_from(["hh-cli", "migrate"]).map(|c| c.command),
            Ok(Commands::Migrate)
        ));
        assert!(matches!(
            Cli::try_parse_from(["hh-cli", "seed"]).map(|c| c.command),
            Ok(Commands::Seed)
        ));
        assert!(Cli::try_parse_from(["hh-cli", "drop"]).is_err());
    }
}
