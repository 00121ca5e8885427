use crate::{DbError, Result};

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the directory database and keeps its schema current.
///
/// The pool it hands out is the only handle to the store; closing it is the
/// caller's job (see [`crate::UserRepository::close`]).
pub struct ConnectionManager {
    database_path: PathBuf,
    max_connections: u32,
}

impl ConnectionManager {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Open (creating if needed) the database file and run migrations.
    pub async fn connect(&self) -> Result<SqlitePool> {
        let parent = self
            .database_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty());

        if let Some(parent) = parent {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        info!("Opened directory database {}", self.database_path.display());

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    /// Private in-memory database, used by tests.
    ///
    /// A single connection that is never recycled: every new in-memory
    /// connection is a new, unmigrated database.
    pub async fn connect_in_memory() -> Result<SqlitePool> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }
}
