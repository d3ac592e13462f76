mod app;
mod config;
pub(crate) mod handlers;
mod init;
pub(crate) mod service;
pub(crate) mod storage;
pub(crate) mod utils;

pub use config::Settings;
pub use handlers::error::AppError;
pub use init::{init_logging, StartupError};

use axum::Router;
use tracing::{info, instrument};

#[cfg(feature = "integration_tests")]
pub use app::build_app;

#[cfg(feature = "integration_tests")]
pub use init::init_storage;

#[cfg(feature = "integration_tests")]
pub use storage::{Todo, TodoId};

#[cfg(feature = "integration_tests")]
pub use service::Service;

#[cfg(feature = "integration_tests")]
pub use storage::test_util::TestStorageBuilder;

#[cfg(feature = "integration_tests")]
pub use handlers::types::{
    CreateTodoResponse, DeleteTodoResponse, HealthzResponse, ReadTodoResponse, UpdateTodoResponse,
};

#[instrument(name = "init_app", skip_all)]
pub async fn init_app(settings: Settings) -> Result<(Router, service::Service), StartupError> {
    info!(settings = ?settings, "init_app with settings");

    let service = init::init_storage(&settings).await?;

    Ok((app::build_app(service.clone()), service))
}
