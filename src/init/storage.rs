use crate::{
    config::types::StorageKind,
    service::Service,
    storage::{ShutdownStorage, SqliteStorage, TodoStorage},
    Settings,
};
use std::sync::Arc;

use tracing::instrument;

use super::StartupError;

#[instrument(name = "init_storage", skip_all)]
pub async fn init_storage(settings: &Settings) -> Result<Service, StartupError> {
    match &settings.storage.backend {
        StorageKind::Sqlite => {
            let sqlite_storage = Arc::new(
                SqliteStorage::connect(
                    settings
                        .storage
                        .sqlite
                        .as_ref()
                        .ok_or(StartupError::MissingStorageConfig("sqlite".to_string()))?,
                )
                .await?,
            );

            Ok(Service::new(
                sqlite_storage.clone() as Arc<dyn TodoStorage>,
                sqlite_storage as Arc<dyn ShutdownStorage>,
            ))
        }
        kind => Err(StartupError::UnsupportedStorage(kind.as_ref().to_string())),
    }
}
