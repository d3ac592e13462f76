mod error;
mod sqlite;
mod todo;

#[cfg(any(test, feature = "integration_tests"))]
pub use sqlite::test_util;
pub(crate) use sqlite::SqliteStorage;

use async_trait::async_trait;
pub(crate) use error::{SqliteStartupError, StorageError};
pub use todo::{Todo, TodoId};

/// Persistence capability for TODO rows. Constructed once at startup and
/// injected into the service as a trait object; the service holds no other
/// handle to the store.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// Insert a row and return the canonical store-computed state, including
    /// the assigned id and timestamps.
    async fn insert(&self, subject: &str, description: &str) -> Result<Todo, StorageError>;

    /// Fetch up to `limit` rows ordered by id descending, strictly below
    /// `prev_id` when a cursor is given.
    async fn page(&self, prev_id: Option<TodoId>, limit: i64) -> Result<Vec<Todo>, StorageError>;

    /// Update subject/description of one row and return its refreshed state.
    /// Zero rows affected is `StorageError::NotFound`.
    async fn update(
        &self,
        id: TodoId,
        subject: &str,
        description: &str,
    ) -> Result<Todo, StorageError>;

    /// Remove every row whose id is in `ids`. Absent ids are not an error;
    /// the caller guarantees `ids` is non-empty.
    async fn delete_batch(&self, ids: &[TodoId]) -> Result<(), StorageError>;
}

#[async_trait]
pub trait ShutdownStorage: Send + Sync {
    async fn shutdown(&self) -> Result<(), StorageError>;
}
