//! HTTP server configuration object and helpers.

use backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) workers: Option<usize>,
}

impl ServerConfig {
    /// Construct a server configuration binding the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            workers: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, company queries are served from PostgreSQL; without it
    /// the handlers fall back to the fixture serving an empty collection.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Override the number of HTTP worker threads.
    ///
    /// Defaults to the actix runtime's choice (one per logical CPU).
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
}
