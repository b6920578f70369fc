use serde::Serialize;
use utoipa::ToSchema;

use super::todo_models::Todo;

#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    pub message: String,
    pub todo: Todo,
}
