use crate::trace_err;

use super::{SqliteStorage, StorageError, Todo, TodoId, TodoStorage};
use async_trait::async_trait;
use tracing::{info, instrument};

#[cfg(test)]
mod tests;

const INSERT: &str = "INSERT INTO todos (subject, description) VALUES (?, ?)";
const CONFIRM: &str =
    "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id = ?";
const READ: &str =
    "SELECT id, subject, description, created_at, updated_at FROM todos ORDER BY id DESC LIMIT ?";
const READ_WITH_ID: &str = "SELECT id, subject, description, created_at, updated_at FROM todos \
     WHERE id < ? ORDER BY id DESC LIMIT ?";
const UPDATE: &str = "UPDATE todos SET subject = ?, description = ?, \
     updated_at = STRFTIME('%Y-%m-%dT%H:%M:%fZ', 'now') WHERE id = ?";

#[async_trait]
impl TodoStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::insert", skip_all)]
    async fn insert(&self, subject: &str, description: &str) -> Result<Todo, StorageError> {
        // Both statements run on one acquired connection so the confirm read
        // observes the row just written and last_insert_rowid belongs to it.
        let mut conn = trace_err!(self.pool.acquire().await, "failed to acquire connection")?;

        let result = trace_err!(
            sqlx::query(INSERT)
                .bind(subject)
                .bind(description)
                .execute(&mut *conn)
                .await,
            "failed to execute insert"
        )?;
        let id = result.last_insert_rowid();

        let todo = trace_err!(
            sqlx::query_as::<_, Todo>(CONFIRM)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await,
            "failed to confirm inserted row"
        )?
        .ok_or(StorageError::Consistency)?;

        info!(todo_id = id, "inserted todo");

        Ok(todo)
    }

    #[instrument(name = "SqliteStorage::page", skip_all, fields(prev_id = ?prev_id, limit = limit))]
    async fn page(&self, prev_id: Option<TodoId>, limit: i64) -> Result<Vec<Todo>, StorageError> {
        let todos = match prev_id {
            Some(prev_id) => {
                sqlx::query_as::<_, Todo>(READ_WITH_ID)
                    .bind(prev_id)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query_as::<_, Todo>(READ)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await
            }
        };

        trace_err!(todos, "failed to fetch todo page").map_err(Into::into)
    }

    #[instrument(name = "SqliteStorage::update", skip_all, fields(todo_id = id))]
    async fn update(
        &self,
        id: TodoId,
        subject: &str,
        description: &str,
    ) -> Result<Todo, StorageError> {
        let mut conn = trace_err!(self.pool.acquire().await, "failed to acquire connection")?;

        let result = trace_err!(
            sqlx::query(UPDATE)
                .bind(subject)
                .bind(description)
                .bind(id)
                .execute(&mut *conn)
                .await,
            "failed to execute update"
        )?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        let todo = trace_err!(
            sqlx::query_as::<_, Todo>(CONFIRM)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await,
            "failed to confirm updated row"
        )?
        .ok_or(StorageError::Consistency)?;

        info!(todo_id = id, "updated todo");

        Ok(todo)
    }

    #[instrument(name = "SqliteStorage::delete_batch", skip_all, fields(id_count = ids.len()))]
    async fn delete_batch(&self, ids: &[TodoId]) -> Result<(), StorageError> {
        // The placeholder list is sized to the input; the service never calls
        // this with an empty set, which would produce an invalid "IN ()".
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM todos WHERE id IN ({placeholders})");

        let mut query = sqlx::query(&sql);
        for id in ids {
            query = query.bind(*id);
        }

        let result = trace_err!(
            query.execute(&self.pool).await,
            "failed to execute bulk delete"
        )?;

        // Absent ids are tolerated: zero rows affected is still success.
        info!(
            requested = ids.len(),
            deleted = result.rows_affected(),
            "deleted todos"
        );

        Ok(())
    }
}
