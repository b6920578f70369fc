use std::sync::Arc;

use crate::auth::AuthService;
use crate::todo::TodoService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub todo_service: TodoService,
}

#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub token_expiry_minutes: i64,
    pub login_email: String,
    pub login_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set"),
            token_expiry_minutes: std::env::var("TOKEN_EXPIRY_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("TOKEN_EXPIRY_MINUTES must be a number"),
            login_email: std::env::var("LOGIN_EMAIL")
                .expect("LOGIN_EMAIL must be set"),
            login_password: std::env::var("LOGIN_PASSWORD")
                .expect("LOGIN_PASSWORD must be set"),
        }
    }
}
