use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Verifies the credentials and issues an access token.
    ///
    /// Unknown email and wrong password produce the same error, so a caller
    /// cannot probe which addresses are registered.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        // Only query that reads the password column; User never carries it.
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            password: String,
            role: UserRole,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, password, role FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by email")
        .map_err(AppError::database)?
        .ok_or_else(invalid_credentials)?;

        let is_valid = verify_password(&dto.password, &user.password)?;
        if !is_valid {
            return Err(invalid_credentials());
        }

        let token = create_access_token(user.id, user.role, jwt_config)?;

        Ok(LoginResponse { token })
    }
}

fn invalid_credentials() -> AppError {
    AppError::bad_request(anyhow::anyhow!("Invalid credentials."))
}
