use std::sync::Arc;

use tokio::sync::RwLock;

use super::todo_models::Todo;
use crate::error::{AppError, Result};

/// In-memory todo collection, insertion order preserved.
///
/// Each mutation holds the write guard across its whole read-modify-write
/// sequence, so the duplicate check on create and the positional replace on
/// update are atomic under concurrent requests.
#[derive(Clone, Default)]
pub struct TodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_all(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    /// Append `todo` unless its id is already taken.
    pub async fn create(&self, todo: Todo) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        if todos.iter().any(|t| t.id == todo.id) {
            return Err(AppError::DuplicateId(todo.id));
        }
        todos.push(todo.clone());
        Ok(todo)
    }

    /// Replace the record whose id is `id` with `updated`, in place.
    ///
    /// The replacement keeps the record's position in the list, and
    /// `updated.id` is stored as given — it is not checked against `id`.
    pub async fn update(&self, id: i64, updated: Todo) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        match todos.iter().position(|t| t.id == id) {
            Some(index) => {
                todos[index] = updated.clone();
                Ok(updated)
            }
            None => Err(AppError::NotFound(id)),
        }
    }

    /// Remove and return the first record whose id is `id`.
    pub async fn delete(&self, id: i64) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        match todos.iter().position(|t| t.id == id) {
            Some(index) => Ok(todos.remove(index)),
            None => Err(AppError::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_preserve_insertion_order() {
        let repo = TodoRepository::new();
        repo.create(todo(2, "b", false)).await.unwrap();
        repo.create(todo(1, "a", false)).await.unwrap();
        repo.create(todo(3, "c", true)).await.unwrap();

        let ids: Vec<i64> = repo.find_all().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn test_create_duplicate_id_rejected() {
        let repo = TodoRepository::new();
        repo.create(todo(7, "first", false)).await.unwrap();

        let err = repo.create(todo(7, "second", false)).await.unwrap_err();
        assert_eq!(err, AppError::DuplicateId(7));

        let all = repo.find_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "first");
    }

    #[tokio::test]
    async fn test_update_replaces_record_in_place() {
        let repo = TodoRepository::new();
        repo.create(todo(1, "a", false)).await.unwrap();
        repo.create(todo(2, "b", false)).await.unwrap();

        let replaced = repo.update(1, todo(1, "done", true)).await.unwrap();
        assert_eq!(replaced, todo(1, "done", true));

        let all = repo.find_all().await;
        assert_eq!(all, vec![todo(1, "done", true), todo(2, "b", false)]);
    }

    #[tokio::test]
    async fn test_update_keeps_position_even_when_body_id_differs() {
        let repo = TodoRepository::new();
        repo.create(todo(1, "a", false)).await.unwrap();
        repo.create(todo(2, "b", false)).await.unwrap();

        // Positional replace: the body's id lands in the store as given.
        repo.update(1, todo(9, "renumbered", false)).await.unwrap();

        let all = repo.find_all().await;
        assert_eq!(all, vec![todo(9, "renumbered", false), todo(2, "b", false)]);
    }

    #[tokio::test]
    async fn test_update_missing_id_leaves_store_unchanged() {
        let repo = TodoRepository::new();
        repo.create(todo(1, "a", false)).await.unwrap();

        let err = repo.update(99, todo(99, "x", false)).await.unwrap_err();
        assert_eq!(err, AppError::NotFound(99));
        assert_eq!(repo.find_all().await, vec![todo(1, "a", false)]);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let repo = TodoRepository::new();
        repo.create(todo(1, "a", false)).await.unwrap();
        repo.create(todo(2, "b", true)).await.unwrap();

        let removed = repo.delete(1).await.unwrap();
        assert_eq!(removed, todo(1, "a", false));
        assert_eq!(repo.find_all().await, vec![todo(2, "b", true)]);
    }

    #[tokio::test]
    async fn test_delete_missing_id() {
        let repo = TodoRepository::new();
        let err = repo.delete(4).await.unwrap_err();
        assert_eq!(err, AppError::NotFound(4));
    }

    #[tokio::test]
    async fn test_create_update_delete_sequence() {
        let repo = TodoRepository::new();

        repo.create(todo(1, "a", false)).await.unwrap();
        assert_eq!(repo.find_all().await, vec![todo(1, "a", false)]);

        repo.update(1, todo(1, "b", true)).await.unwrap();
        assert_eq!(repo.find_all().await, vec![todo(1, "b", true)]);

        repo.delete(1).await.unwrap();
        assert!(repo.find_all().await.is_empty());
    }
}
