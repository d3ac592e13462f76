mod observability;
mod storage;

use crate::storage::SqliteStartupError;
use thiserror::Error;

pub use observability::init_logging;
pub use storage::init_storage;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to open sqlite storage")]
    OpenSqliteStorage(#[from] SqliteStartupError),

    #[error("Unsupported storage kind: {0}")]
    UnsupportedStorage(String),

    #[error("Missing storage config: {0}")]
    MissingStorageConfig(String),

    #[error("Failed to load configs")]
    LoadConfig(#[from] config::ConfigError),

    #[error("Failed to set global tracing subscriber")]
    SetGlobalTracingSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}
