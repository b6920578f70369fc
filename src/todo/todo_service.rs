use super::todo_models::Todo;
use super::todo_repository::TodoRepository;
use crate::error::Result;

/// Service layer for todo-related business logic.
#[derive(Clone)]
pub struct TodoService {
    repo: TodoRepository,
}

impl TodoService {
    pub fn new(repo: TodoRepository) -> Self {
        Self { repo }
    }

    pub async fn list_todos(&self) -> Vec<Todo> {
        self.repo.find_all().await
    }

    pub async fn create_todo(&self, todo: Todo) -> Result<Todo> {
        self.repo.create(todo).await
    }

    pub async fn update_todo(&self, id: i64, todo: Todo) -> Result<Todo> {
        self.repo.update(id, todo).await
    }

    pub async fn delete_todo(&self, id: i64) -> Result<Todo> {
        self.repo.delete(id).await
    }
}
