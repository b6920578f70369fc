use axum::{extract::State, Json};

use super::auth_dto::{LoginRequest, LoginResponse};
use crate::{error::Result, state::AppState};

/// Login with email and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let access_token = state.auth_service.login(&payload.email, &payload.password)?;

    tracing::debug!(subject = %payload.email, "login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        access_token,
        token_type: "bearer".to_string(),
    }))
}
