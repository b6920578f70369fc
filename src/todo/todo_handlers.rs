use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{todo_dto::TodoResponse, todo_models::Todo};
use crate::{error::Result, middleware::CurrentUser, state::AppState};

/// Get all todos
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "List of todos", body = [Todo]),
        (status = 401, description = "Unauthorized")
    ),
    tag = "todos",
    security(("bearer_auth" = []))
)]
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todo_service.list_todos().await)
}

/// Create a todo
#[utoipa::path(
    post,
    path = "/todos",
    request_body = Todo,
    responses(
        (status = 200, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Duplicate id"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "todos",
    security(("bearer_auth" = []))
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<Todo>,
) -> Result<Json<TodoResponse>> {
    let todo = state.todo_service.create_todo(payload).await?;

    tracing::debug!(subject = %user.0, id = todo.id, "todo created");

    Ok(Json(TodoResponse {
        message: "Todo created".to_string(),
        todo,
    }))
}

/// Update a todo
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Id of the todo to replace")),
    request_body = Todo,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found")
    ),
    tag = "todos",
    security(("bearer_auth" = []))
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<Todo>,
) -> Result<Json<TodoResponse>> {
    let todo = state.todo_service.update_todo(id, payload).await?;

    tracing::debug!(subject = %user.0, id, "todo updated");

    Ok(Json(TodoResponse {
        message: "Todo updated".to_string(),
        todo,
    }))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Id of the todo to delete")),
    responses(
        (status = 200, description = "Todo deleted", body = TodoResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found")
    ),
    tag = "todos",
    security(("bearer_auth" = []))
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>> {
    let todo = state.todo_service.delete_todo(id).await?;

    tracing::debug!(subject = %user.0, id, "todo deleted");

    Ok(Json(TodoResponse {
        message: "Todo deleted".to_string(),
        todo,
    }))
}
