use super::{ShutdownStorage, SqliteStorage, StorageError};
use async_trait::async_trait;
use tracing::instrument;

#[async_trait]
impl ShutdownStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::shutdown", skip_all)]
    async fn shutdown(&self) -> Result<(), StorageError> {
        // Waits for checked-out connections to be returned before closing.
        self.pool.close().await;
        Ok(())
    }
}
