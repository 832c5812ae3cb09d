use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that verifies the bearer token and exposes the caller's claims.
///
/// Rejection is a uniform 401 `{"error": "Unauthorized"}` whether the header
/// is missing, carries a non-bearer scheme, or the token fails verification.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// User id from the token subject.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub).map_err(|_| AppError::unauthorized())
    }

    /// Role recorded when the token was issued.
    pub fn role(&self) -> UserRole {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(AppError::unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(AppError::unauthorized)?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_the_subject() {
        let id = Uuid::new_v4();
        let auth_user = AuthUser(Claims {
            sub: id.to_string(),
            role: UserRole::Student,
            iat: 1234567890,
            exp: 9999999999,
        });

        assert_eq!(auth_user.user_id().unwrap(), id);
    }

    #[test]
    fn user_id_rejects_a_non_uuid_subject() {
        let auth_user = AuthUser(Claims {
            sub: "not-a-uuid".to_string(),
            role: UserRole::Student,
            iat: 1234567890,
            exp: 9999999999,
        });

        assert!(auth_user.user_id().is_err());
    }
}
