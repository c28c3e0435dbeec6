//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use crate::outbound::persistence::DbPool;

const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) shutdown_grace: Duration,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration that serves from memory on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the students repository.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Bound how long in-flight requests may run once shutdown starts.
    #[must_use]
    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    /// Address the listener binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Time in-flight requests get to finish once a graceful stop begins.
    #[must_use]
    pub fn shutdown_grace(&self) -> Duration {
        self.shutdown_grace
    }

    /// Whether students are persisted in PostgreSQL rather than memory.
    #[must_use]
    pub fn has_db_pool(&self) -> bool {
        self.db_pool.is_some()
    }
}
