use anyhow::Context;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{CreateUserDto, UpdateUserDto, User, UserFilterParams};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    /// Inserts a user with a bcrypt-hashed password and returns the new id.
    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<Uuid, AppError> {
        let hashed_password = hash_password(&dto.password)?;
        let role = dto.role.unwrap_or_default();

        let user_id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (name, email, password, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(role)
        .fetch_one(db)
        .await
        .context("Failed to insert user")
        .map_err(AppError::database)?;

        Ok(user_id)
    }

    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        filters: UserFilterParams,
    ) -> Result<Vec<User>, AppError> {
        let mut query = QueryBuilder::new("SELECT id, name, email, role FROM users");

        if let Some(search) = &filters.search {
            query.push(" WHERE name ILIKE ");
            query.push_bind(format!("%{search}%"));
        }

        let users = query
            .build_query_as::<User>()
            .fetch_all(db)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, name, email, role FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(db)
                .await
                .context("Failed to fetch user by id")
                .map_err(AppError::database)?
                .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    /// Applies the provided fields in a single statement; absent fields keep
    /// their stored values through COALESCE. A new password is re-hashed
    /// before it is written.
    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: Uuid, dto: UpdateUserDto) -> Result<(), AppError> {
        let hashed_password = dto.password.as_deref().map(hash_password).transpose()?;

        let updated = sqlx::query_scalar::<_, Uuid>(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                password = COALESCE($4, password),
                role = COALESCE($5, role)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.email)
        .bind(hashed_password)
        .bind(dto.role)
        .fetch_optional(db)
        .await
        .context("Failed to update user")
        .map_err(AppError::database)?;

        if updated.is_none() {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let deleted =
            sqlx::query_scalar::<_, Uuid>("DELETE FROM users WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(db)
                .await
                .context("Failed to delete user")
                .map_err(AppError::database)?;

        if deleted.is_none() {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
