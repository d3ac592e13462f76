pub(crate) mod todo;

use std::sync::Arc;

use crate::handlers::error::AppError;
use crate::storage::{ShutdownStorage, TodoStorage};
use todo::ServiceTodoRef;
use tracing::instrument;

/// Cheap to clone; shared by every in-flight request. Holds no mutable
/// state of its own — all consistency is delegated to the store.
#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    shutdown_storage: Arc<dyn ShutdownStorage>,
}

impl Service {
    #[instrument(name = "Service::new", skip_all)]
    pub fn new(
        todo_storage: Arc<dyn TodoStorage>,
        shutdown_storage: Arc<dyn ShutdownStorage>,
    ) -> Self {
        Self {
            todo_storage,
            shutdown_storage,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone())
    }

    #[instrument(name = "Service::shutdown_storage", skip_all)]
    pub async fn shutdown_storage(&self) -> Result<(), AppError> {
        self.shutdown_storage.shutdown().await.map_err(Into::into)
    }
}
