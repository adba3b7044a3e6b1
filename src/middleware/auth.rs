use axum::{extract::FromRequestParts, http::header};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize, Serialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// The caller's identity, resolved from a bearer token issued by the
/// account service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Sign a token for `user_id`. The seed binary and tests use this; production
/// tokens come from the account service with the same secret.
pub fn issue_token(secret: &str, user_id: i64, ttl: Duration) -> Result<String, AppError> {
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let exp = usize::try_from(expiration.timestamp())
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Expiration out of range")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn verify_token(secret: &str, token: &str) -> Result<AuthUser, AppError> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;

    let user_id = decoded
        .claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::Unauthorized("Invalid user id in token".into()))?;

    Ok(AuthUser { user_id })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization scheme".into()))?
            .trim();

        verify_token(&state.config.jwt_secret, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_resolves_user() {
        let token = issue_token(SECRET, 42, Duration::hours(1)).unwrap();
        let user = verify_token(SECRET, &token).unwrap();
        assert_eq!(user, AuthUser { user_id: 42 });
    }

    #[test]
    fn expiration_before_epoch_is_internal_error() {
        let ttl = Duration::seconds(-(Utc::now().timestamp() + 3600));
        let err = issue_token(SECRET, 42, ttl).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let token = issue_token(SECRET, 42, Duration::hours(1)).unwrap();
        let err = verify_token("other-secret", &token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let token = issue_token(SECRET, 42, Duration::hours(-2)).unwrap();
        let err = verify_token(SECRET, &token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
