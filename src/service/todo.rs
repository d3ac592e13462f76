use std::sync::Arc;

use tracing::instrument;

use crate::{
    handlers::error::AppError,
    storage::{Todo, TodoId, TodoStorage},
};


pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    /// Create a TODO and return the row exactly as the store computed it,
    /// ids and timestamps included. The subject check runs here as well as
    /// in the handler: the service is usable without any particular caller
    /// in front of it.
    #[instrument(name = "Service::todo::create", skip_all)]
    pub(crate) async fn create(&self, subject: &str, description: &str) -> Result<Todo, AppError> {
        if subject.is_empty() {
            return Err(AppError::EmptySubject);
        }

        self.storage
            .insert(subject, description)
            .await
            .map_err(Into::into)
    }

    /// One page of TODOs in descending id order. `prev_id == 0` means no
    /// cursor; passing the last-seen id pages backward through history. A
    /// non-positive `size` short-circuits to an empty page, and an empty
    /// page is a successful outcome, never an error.
    #[instrument(name = "Service::todo::read", skip_all, fields(prev_id = prev_id, size = size))]
    pub(crate) async fn read(&self, prev_id: TodoId, size: i64) -> Result<Vec<Todo>, AppError> {
        if size <= 0 {
            return Ok(Vec::new());
        }

        let cursor = (prev_id != 0).then_some(prev_id);
        self.storage.page(cursor, size).await.map_err(Into::into)
    }

    /// Update subject/description of one row; the store refreshes
    /// `updated_at`. A missing row is `AppError::NotFound`, distinguishable
    /// from every other failure.
    #[instrument(name = "Service::todo::update", skip_all, fields(todo_id = id))]
    pub(crate) async fn update(
        &self,
        id: TodoId,
        subject: &str,
        description: &str,
    ) -> Result<Todo, AppError> {
        if id == 0 {
            return Err(AppError::ZeroId);
        }
        if subject.is_empty() {
            return Err(AppError::EmptySubject);
        }

        self.storage
            .update(id, subject, description)
            .await
            .map_err(Into::into)
    }

    /// Best-effort bulk delete. Absent ids and duplicates are tolerated and
    /// the empty set never reaches the store; only store-level failures are
    /// reported.
    #[instrument(name = "Service::todo::delete", skip_all, fields(id_count = ids.len()))]
    pub(crate) async fn delete(&self, ids: &[TodoId]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        self.storage.delete_batch(ids).await.map_err(Into::into)
    }
}
