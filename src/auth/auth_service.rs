use std::sync::Arc;

use crate::auth::jwt::create_access_token;
use crate::error::{AppError, Result};
use crate::state::Config;

/// Checks submitted credentials against the configured identity and mints
/// access tokens for matching pairs.
#[derive(Clone)]
pub struct AuthService {
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Issue an access token if the pair matches the configured identity.
    ///
    /// Any non-matching pair fails with `InvalidCredentials`; the email is
    /// never inspected beyond equality, so malformed input gets the same
    /// answer as a wrong password.
    pub fn login(&self, email: &str, password: &str) -> Result<String> {
        if email != self.config.login_email || password != self.config.login_password {
            return Err(AppError::InvalidCredentials);
        }

        create_access_token(
            email,
            &self.config.jwt_secret,
            self.config.token_expiry_minutes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::verify_token;

    fn service() -> AuthService {
        AuthService::new(Arc::new(Config {
            jwt_secret: "test-secret".to_string(),
            token_expiry_minutes: 30,
            login_email: "test@test.com".to_string(),
            login_password: "123456".to_string(),
        }))
    }

    #[test]
    fn test_login_with_correct_credentials() {
        let token = service().login("test@test.com", "123456").unwrap();
        let claims = verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, "test@test.com");
    }

    #[test]
    fn test_login_with_wrong_password() {
        let err = service().login("test@test.com", "wrong").unwrap_err();
        assert_eq!(err, AppError::InvalidCredentials);
    }

    #[test]
    fn test_login_with_unknown_email() {
        let err = service().login("other@test.com", "123456").unwrap_err();
        assert_eq!(err, AppError::InvalidCredentials);
    }

    #[test]
    fn test_login_with_empty_pair() {
        let err = service().login("", "").unwrap_err();
        assert_eq!(err, AppError::InvalidCredentials);
    }
}
