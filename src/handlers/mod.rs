pub(crate) mod error;
pub(crate) mod todo;
pub mod types;

pub(crate) use crate::service::Service;
use axum::{response::IntoResponse, Json};
pub(crate) use types::*;

#[tracing::instrument(name = "handlers::healthz", skip_all)]
pub(crate) async fn healthz() -> impl IntoResponse {
    Json(HealthzResponse {
        message: "OK".to_string(),
    })
}
