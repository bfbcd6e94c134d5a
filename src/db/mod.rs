//! Database module providing connection management and queries.

pub mod drilling_entries;
pub mod financial_params;
pub mod import_staging;
pub mod raw_sql;
pub mod users;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Connect timeout for the initial pool handshake.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Database connection pool wrapper around the SeaORM connection.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        if !config.database_url.starts_with("postgres://")
            && !config.database_url.starts_with("postgresql://")
        {
            return Err(AppError::Database(format!(
                "Invalid DATABASE_URL format: {}. Expected 'postgres://...'",
                config.database_url
            )));
        }

        let mut opts = ConnectOptions::new(&config.database_url);
        opts.max_connections(config.db_max_connections)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .sqlx_logging(false);

        let conn = Database::connect(opts)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Get access to the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Close the pool, releasing every connection.
    ///
    /// Operator binaries call this exactly once after their work function has
    /// returned, on success and failure paths alike.
    pub async fn close(self) -> AppResult<()> {
        self.conn
            .close()
            .await
            .map_err(|e| AppError::Database(format!("Failed to close database pool: {}", e)))
    }
}
