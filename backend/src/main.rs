//! Backend entry-point: wires the companies REST API, health probes, and
//! OpenAPI docs.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};

use crate::server::{ServerConfig, create_server};

/// Bind address used when `COMPANIES_BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = resolve_bind_addr()?;
    let db_pool = build_pool_from_env().await?;

    #[cfg(feature = "example-data")]
    seed_example_data(db_pool.as_ref()).await?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

/// Read the bind address from `COMPANIES_BIND_ADDR`.
fn resolve_bind_addr() -> std::io::Result<SocketAddr> {
    let raw = env::var("COMPANIES_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
    raw.parse()
        .map_err(|e| std::io::Error::other(format!("invalid COMPANIES_BIND_ADDR '{raw}': {e}")))
}

/// Build the connection pool when `DATABASE_URL` is configured.
///
/// A missing variable is not fatal: the server falls back to the fixture
/// repository and warns during assembly instead.
async fn build_pool_from_env() -> std::io::Result<Option<DbPool>> {
    let Ok(database_url) = env::var("DATABASE_URL") else {
        return Ok(None);
    };
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
    Ok(Some(pool))
}

#[cfg(feature = "example-data")]
async fn seed_example_data(db_pool: Option<&DbPool>) -> std::io::Result<()> {
    use backend::example_data::{ExampleDataSettings, seed_example_companies_on_startup};
    use ortho_config::OrthoConfig;

    let settings = ExampleDataSettings::load()
        .map_err(|e| std::io::Error::other(format!("example data settings: {e}")))?;
    seed_example_companies_on_startup(&settings, db_pool)
        .await
        .map_err(|e| std::io::Error::other(format!("example data seeding: {e}")))?;
    Ok(())
}
