use crate::storage::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use strum_macros::AsRefStr;
use thiserror::Error;

#[derive(Debug, Error, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AppError {
    #[error("Subject must not be empty")]
    EmptySubject,

    #[error("Id must not be zero")]
    ZeroId,

    #[error("Not found")]
    NotFound,

    #[error("Store rejected the write")]
    Constraint(#[source] StorageError),

    #[error("Store lost a row it just wrote")]
    Consistency,

    #[error("Internal storage error")]
    InternalStorage(#[source] StorageError),
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NotFound => Self::NotFound,
            StorageError::Consistency => Self::Consistency,
            // raised by the store, but caused by caller input
            e @ StorageError::Constraint(_) => Self::Constraint(e),
            e => Self::InternalStorage(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "AppError");

        let status = match &self {
            AppError::EmptySubject | AppError::ZeroId | AppError::Constraint { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Consistency | AppError::InternalStorage { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(json!({
            "error": self.as_ref(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
