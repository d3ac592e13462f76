#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
pub use server::{spawn_test_app, TestAppHandle};

use todo_backend::{build_app, Service, TestStorageBuilder};

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub async fn create_test_app() -> Router {
    let todo_storage = TestStorageBuilder::new().build_todo().await;
    let shutdown_storage = TestStorageBuilder::new().build_shutdown().await;

    let service = Service::new(todo_storage, shutdown_storage);

    build_app(service)
}
