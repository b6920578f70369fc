pub mod auth_dto;
pub mod auth_handlers;
pub mod auth_service;
pub mod jwt;

pub use auth_dto::{LoginRequest, LoginResponse};
pub use auth_handlers::login;
pub use auth_service::AuthService;
pub use jwt::{create_access_token, verify_token, Claims};
