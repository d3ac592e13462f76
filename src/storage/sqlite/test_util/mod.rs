#![allow(dead_code)]
use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::storage::{ShutdownStorage, TodoStorage};

use super::{SqliteStorage, SCHEMA};

pub struct TestStorageBuilder {
    seed_subjects: Vec<String>,
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        Self {
            seed_subjects: Vec::new(),
        }
    }

    pub fn with_todos(mut self, count: usize) -> Self {
        self.seed_subjects = (0..count).map(|i| format!("todo {i}")).collect();
        self
    }

    pub async fn build_todo(&self) -> Arc<dyn TodoStorage> {
        self.open().await as Arc<dyn TodoStorage>
    }

    pub async fn build_shutdown(&self) -> Arc<dyn ShutdownStorage> {
        self.open().await as Arc<dyn ShutdownStorage>
    }

    async fn open(&self) -> Arc<SqliteStorage> {
        // A single connection: every in-memory sqlite database is private to
        // the connection that opened it.
        let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        sqlx::query(SCHEMA).execute(&pool).await.unwrap();

        let storage = Arc::new(SqliteStorage { pool });
        for subject in &self.seed_subjects {
            storage.insert(subject, "").await.unwrap();
        }

        storage
    }
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
