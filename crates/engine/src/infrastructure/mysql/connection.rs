//! MySQL connection pool

use anyhow::{Context, Result};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

/// Seconds to wait for a free pooled connection before a lookup fails.
const ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Open the shared pool. Connections are established lazily on first use,
/// so a store that is down at startup surfaces as lookup failures instead
/// of keeping the webhook offline.
pub fn connect(database_url: &str, max_connections: u32) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
        .connect_lazy(database_url)
        .context("Invalid DATABASE_URL")?;

    tracing::info!(max_connections, "MySQL pool configured");
    Ok(pool)
}
