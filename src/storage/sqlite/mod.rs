pub(super) mod error;
mod shutdown_impl;
mod todos_impl;

#[cfg(any(test, feature = "integration_tests"))]
pub mod test_util;

use super::{ShutdownStorage, StorageError, Todo, TodoId, TodoStorage};
use crate::config::types::SqliteConfig;
use error::SqliteStartupError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, instrument};

// AUTOINCREMENT keeps ids monotonically increasing and never reused after a
// delete. The CHECK constraint backs up the service-level non-empty-subject
// validation. Both timestamp defaults observe the same statement clock, so a
// fresh row always has created_at == updated_at.
static SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    subject     TEXT NOT NULL CHECK (subject <> ''),
    description TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL DEFAULT (STRFTIME('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at  TEXT NOT NULL DEFAULT (STRFTIME('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

pub(crate) struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    #[instrument(name = "Storage::connect", skip_all)]
    pub async fn connect(sqlite_config: &SqliteConfig) -> Result<Self, SqliteStartupError> {
        let options = SqliteConnectOptions::new()
            .filename(&sqlite_config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(sqlite_config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, path = ?sqlite_config.path, "failed to open db");
                SqliteStartupError::Connect(e)
            })?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(SqliteStartupError::Schema)?;

        info!(path = ?sqlite_config.path, "sqlite storage ready");

        Ok(Self { pool })
    }
}
