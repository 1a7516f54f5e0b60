//! Populate the companies table with deterministic example data.
//!
//! Connects to PostgreSQL, applies pending migrations, and inserts the
//! companies generated for a named registry seed. Reruns against a populated
//! table are no-ops, so the binary is safe to wire into provisioning scripts.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::path::PathBuf;

use backend::domain::ports::SeedingOutcome;
use backend::example_data::{ExampleDataSettings, seed_example_companies_on_startup};
use backend::outbound::persistence::{DbPool, PoolConfig};
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tokio::runtime::Builder;

/// Migrations compiled into the binary so deployments need no migrations
/// directory on disk.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// `seed-companies` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-companies",
    about = "Apply migrations and insert deterministic example companies",
    version
)]
struct CliArgs {
    /// Registry seed name to generate from.
    #[arg(long = "seed", value_name = "name")]
    seed_name: Option<String>,
    /// Override for the number of companies generated.
    #[arg(long = "count", value_name = "n")]
    count: Option<usize>,
    /// Path to the seed registry JSON.
    #[arg(long = "registry", value_name = "path")]
    registry_path: Option<PathBuf>,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();

    let database_url = resolve_database_url(args.database_url.clone())?;
    apply_migrations(&database_url)?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build seeding runtime")?;
    let outcome = runtime.block_on(seed(&database_url, &args))?;

    match outcome {
        Some(SeedingOutcome::Applied { inserted }) => {
            println!("seeded {inserted} companies");
        }
        Some(SeedingOutcome::AlreadySeeded { existing }) => {
            println!("store already holds {existing} companies; nothing inserted");
        }
        None => println!("seeding skipped"),
    }
    Ok(())
}

fn apply_migrations(database_url: &str) -> Result<()> {
    let mut connection =
        PgConnection::establish(database_url).wrap_err("failed to connect for migrations")?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("failed to run migrations: {e}"))?;
    println!("applied {} pending migrations", applied.len());
    Ok(())
}

async fn seed(database_url: &str, args: &CliArgs) -> Result<Option<SeedingOutcome>> {
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .wrap_err("failed to create database pool")?;

    let settings = ExampleDataSettings {
        enabled: true,
        seed_name: args.seed_name.clone(),
        count: args.count,
        registry_path: args.registry_path.clone(),
    };

    seed_example_companies_on_startup(&settings, Some(&pool))
        .await
        .wrap_err("seeding failed")
}

fn resolve_database_url(explicit: Option<String>) -> Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(eyre!("--database-url must not be empty when provided"));
        }
        return Ok(value);
    }

    let from_env = env::var("DATABASE_URL")
        .map_err(|_| eyre!("database URL missing: set --database-url or DATABASE_URL"))?;
    if from_env.trim().is_empty() {
        return Err(eyre!("DATABASE_URL must not be empty"));
    }
    Ok(from_env)
}
