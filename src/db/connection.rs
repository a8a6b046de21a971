// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

pub const ENV_DB_PATH: &str = "MEDIADB_PATH";
pub const ENV_MAX_CONNECTIONS: &str = "MEDIADB_MAX_CONNECTIONS";
pub const ENV_BUSY_TIMEOUT_MS: &str = "MEDIADB_BUSY_TIMEOUT_MS";

const DEFAULT_MAX_CONNECTIONS: u32 = 15;
const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5000;

/// Where the store lives and how the pool talks to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let path = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("mediadb")
            .join("mediadb.db");

        Self {
            path,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `MEDIADB_*` environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DB_PATH) {
            config.path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_MAX_CONNECTIONS) {
            config.max_connections = parse_u32(ENV_MAX_CONNECTIONS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_BUSY_TIMEOUT_MS) {
            config.busy_timeout_ms = parse_u32(ENV_BUSY_TIMEOUT_MS, &raw)?;
        }

        Ok(config)
    }
}

fn parse_u32(key: &str, raw: &str) -> AppResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| AppError::Other(format!("Invalid {} '{}': {}", key, raw, e)))
}

/// Create a connection pool
///
/// Every connection gets:
/// - Foreign keys enabled
/// - WAL journal mode
/// - Busy timeout from the config
pub fn create_connection_pool(config: &DatabaseConfig) -> AppResult<ConnectionPool> {
    if let Some(parent) = config.path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pragmas = format!(
        "PRAGMA foreign_keys = ON;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA busy_timeout = {};",
        config.busy_timeout_ms
    );

    let manager = SqliteConnectionManager::file(&config.path)
        .with_init(move |conn| conn.execute_batch(&pragmas));

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    log::info!(
        "opened connection pool at {} (max {} connections)",
        config.path.display(),
        config.max_connections
    );

    Ok(pool)
}

/// Get a connection from the pool
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_path() {
        let config = DatabaseConfig::default();
        assert!(config.path.ends_with("mediadb/mediadb.db"));
        assert_eq!(config.max_connections, 15);
        assert_eq!(config.busy_timeout_ms, 5000);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_DB_PATH, "/srv/media/meta.db"),
            (ENV_MAX_CONNECTIONS, "4"),
            (ENV_BUSY_TIMEOUT_MS, " 250 "),
        ]
        .into_iter()
        .collect();

        let config = DatabaseConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.path, PathBuf::from("/srv/media/meta.db"));
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.busy_timeout_ms, 250);
    }

    #[test]
    fn test_invalid_env_value_is_error() {
        let result = DatabaseConfig::from_lookup(|k| {
            (k == ENV_MAX_CONNECTIONS).then(|| "many".to_string())
        });
        assert!(matches!(result, Err(AppError::Other(_))));
    }

    #[test]
    fn test_connection_pool_creation() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("nested").join("test.db"),
            max_connections: 2,
            busy_timeout_ms: 1000,
        };

        let pool = create_connection_pool(&config).unwrap();
        let conn = get_connection(&pool).unwrap();

        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);

        let timeout: i64 = conn
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 1000);
        assert!(config.path.exists());
    }

    #[test]
    fn test_test_connection() {
        let conn = create_test_connection().unwrap();

        let result: i32 = conn
            .query_row("SELECT 1 + 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 2);
    }
}
