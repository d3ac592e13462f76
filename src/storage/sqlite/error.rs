use strum_macros::AsRefStr;
use thiserror::Error;

#[derive(Error, Debug, AsRefStr)]
pub enum SqliteStartupError {
    #[error("Failed to open sqlite storage")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to apply sqlite schema")]
    Schema(#[source] sqlx::Error),
}
