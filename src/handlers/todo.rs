use super::error::AppError;
use super::types::*;
use crate::handlers::Service;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

#[tracing::instrument(name = "handlers::todo::create", skip_all)]
pub(crate) async fn create(
    State(service): State<Service>,
    Json(input): Json<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    if input.subject.is_empty() {
        return Err(AppError::EmptySubject);
    }

    let todo = service
        .todo()
        .create(&input.subject, &input.description)
        .await?;

    info!(todo_id = todo.id, "created todo");

    Ok((StatusCode::CREATED, Json(CreateTodoResponse { todo })))
}

#[tracing::instrument(name = "handlers::todo::read", skip_all)]
pub(crate) async fn read(
    State(service): State<Service>,
    Query(params): Query<ListTodoParams>,
) -> Result<impl IntoResponse, AppError> {
    info!(prev_id = params.prev_id, size = params.size, "read todos");

    let todos = service.todo().read(params.prev_id, params.size).await?;

    info!(count = todos.len(), "read todo page");

    Ok(Json(ReadTodoResponse { todos }))
}

#[tracing::instrument(name = "handlers::todo::update", skip_all)]
pub(crate) async fn update(
    State(service): State<Service>,
    Json(input): Json<UpdateTodo>,
) -> Result<impl IntoResponse, AppError> {
    if input.id == 0 {
        return Err(AppError::ZeroId);
    }
    if input.subject.is_empty() {
        return Err(AppError::EmptySubject);
    }

    let todo = service
        .todo()
        .update(input.id, &input.subject, &input.description)
        .await?;

    info!(todo_id = todo.id, "updated todo");

    Ok(Json(UpdateTodoResponse { todo }))
}

#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Json(input): Json<DeleteTodo>,
) -> Result<impl IntoResponse, AppError> {
    info!(id_count = input.ids.len(), "delete todos");

    service.todo().delete(&input.ids).await?;

    Ok(Json(DeleteTodoResponse {}))
}
