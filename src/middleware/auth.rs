use crate::{auth::verify_token, error::AppError, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

/// Verified token subject, inserted into request extensions for handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::TokenInvalid)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::TokenInvalid)?;

    let claims = verify_token(token, &state.config.jwt_secret)?;

    req.extensions_mut().insert(CurrentUser(claims.sub));

    Ok(next.run(req).await)
}
