//! Database connection pool management
//!
//! Uses a sqlx SqlitePool with explicit connection limits. The pool is
//! passed by reference into every repository; nothing here is a
//! process-wide singleton, so tests can point an isolated pool at a
//! throwaway database file.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{DbError, Result};

/// Pool bounds. Fixed constants in this version, not environment-driven.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum open connections
    pub max_connections: u32,
    /// Connections the pool keeps alive when idle. SQLite's driver has
    /// no separate max-idle knob; the retained floor plus `idle_timeout`
    /// bounds idle connections instead.
    pub min_connections: u32,
    /// How long a connection may sit idle before being closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of any single connection
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 5,
            idle_timeout: Duration::from_secs(3 * 60),
            max_lifetime: Duration::from_secs(5 * 60),
        }
    }
}

/// Open a pooled handle to the store at `path` with default bounds.
///
/// The database file is created if missing. Fails with
/// [`DbError::Connection`] if the store cannot be reached.
pub async fn connect<P: AsRef<Path>>(path: P) -> Result<SqlitePool> {
    connect_with_options(path, &PoolConfig::default()).await
}

/// Open a pooled handle with explicit bounds.
pub async fn connect_with_options<P: AsRef<Path>>(
    path: P,
    config: &PoolConfig,
) -> Result<SqlitePool> {
    let path = path.as_ref();

    let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", path.display()))
        .map_err(DbError::connection)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        // Prevent SQLITE_BUSY errors when pool connections contend
        .busy_timeout(Duration::from_secs(5))
        // WAL mode allows relaxed sync
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await
        .map_err(DbError::connection)?;

    tracing::debug!(path = %path.display(), "opened store");

    Ok(pool)
}
