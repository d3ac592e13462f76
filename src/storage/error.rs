use sqlx::error::ErrorKind;
use strum_macros::AsRefStr;
use thiserror::Error;

pub use super::sqlite::error::SqliteStartupError;

#[derive(Error, Debug, AsRefStr)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error("Store rejected the write with a constraint violation")]
    Constraint(#[source] sqlx::Error),

    #[error("Row missing after a successful write")]
    Consistency,

    #[error("Internal storage error")]
    Internal(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(value: sqlx::Error) -> Self {
        let is_constraint = value.as_database_error().is_some_and(|db| {
            matches!(
                db.kind(),
                ErrorKind::CheckViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
            )
        });

        if is_constraint {
            Self::Constraint(value)
        } else {
            Self::Internal(value)
        }
    }
}
