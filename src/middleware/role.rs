//! Role-based authorization layered on top of authentication.
//!
//! Two pieces: [`check_any_role`] for manual checks inside handlers, and the
//! [`RequireManager`] extractor for manager-only routes. The extractor runs
//! [`AuthUser`] first, so a request without a valid token is rejected with
//! 401 before any role is inspected; 403 only ever means "authenticated but
//! not allowed".

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Checks that the caller's role is in the allow-list. An empty list admits
/// nobody.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.role()) {
        return Err(AppError::forbidden());
    }

    Ok(())
}

/// Extractor for manager-only routes.
///
/// The role comes from the token claims, not the database: a role change
/// after login does not affect outstanding tokens until they expire.
#[derive(Debug, Clone)]
pub struct RequireManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_any_role(&auth_user, &[UserRole::Manager])?;

        Ok(RequireManager(auth_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::Claims;
    use axum::http::StatusCode;
    use uuid::Uuid;

    fn auth_user_with_role(role: UserRole) -> AuthUser {
        AuthUser(Claims {
            sub: Uuid::new_v4().to_string(),
            role,
            iat: 1234567890,
            exp: 9999999999,
        })
    }

    #[test]
    fn manager_passes_a_manager_only_list() {
        let auth_user = auth_user_with_role(UserRole::Manager);
        assert!(check_any_role(&auth_user, &[UserRole::Manager]).is_ok());
    }

    #[test]
    fn student_is_forbidden_by_a_manager_only_list() {
        let auth_user = auth_user_with_role(UserRole::Student);
        let err = check_any_role(&auth_user, &[UserRole::Manager]).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn student_passes_when_both_roles_are_allowed() {
        let auth_user = auth_user_with_role(UserRole::Student);
        assert!(check_any_role(&auth_user, &[UserRole::Student, UserRole::Manager]).is_ok());
    }

    #[test]
    fn empty_allow_list_admits_nobody() {
        let auth_user = auth_user_with_role(UserRole::Manager);
        assert!(check_any_role(&auth_user, &[]).is_err());
    }
}
