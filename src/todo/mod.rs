pub mod todo_dto;
pub mod todo_handlers;
pub mod todo_models;
pub mod todo_repository;
pub mod todo_service;

pub use todo_dto::TodoResponse;
pub use todo_handlers::{create_todo, delete_todo, list_todos, update_todo};
pub use todo_models::Todo;
pub use todo_repository::TodoRepository;
pub use todo_service::TodoService;
