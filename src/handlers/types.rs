use serde::{Deserialize, Serialize};

use crate::storage::{Todo, TodoId};

pub(crate) const DEFAULT_PAGE_SIZE: i64 = 5;

// Request bodies default missing fields so that presence checks surface as
// validation errors (400) instead of deserialization rejections.

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTodo {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateTodo {
    #[serde(default)]
    pub id: TodoId,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListTodoParams {
    #[serde(default)]
    pub prev_id: TodoId,
    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteTodo {
    #[serde(default)]
    pub ids: Vec<TodoId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthzResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadTodoResponse {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTodoResponse {}
