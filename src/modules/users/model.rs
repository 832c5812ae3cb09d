//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`]: user entity as exposed by the API (never carries the password
//!   hash)
//! - [`UserRole`]: the two roles known to the platform
//!
//! # Request DTOs
//!
//! - [`CreateUserDto`]: register a new user
//! - [`UpdateUserDto`]: partial update; empty-string fields count as absent
//! - [`UserFilterParams`]: query parameters for listing users
//!
//! # Responses
//!
//! Handlers wrap payloads under a key matching the public API shape
//! (`user`, `users`, `userId`); see [`UserResponse`], [`UsersResponse`] and
//! [`CreateUserResponse`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::serde::empty_string_as_none;

/// Access level of a user.
///
/// Stored in Postgres as the `user_role` enum and embedded in token claims.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Manager,
}

/// A user as exposed by the API.
///
/// The password hash stays in the database; queries backing this type never
/// select it.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// DTO for registering a user.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 2, message = "Name must have at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    pub password: String,
    /// Defaults to `student` when omitted.
    pub role: Option<UserRole>,
}

/// DTO for partially updating a user.
///
/// Every field is optional, and an empty string counts as absent rather than
/// invalid. Only fields that survive both filters are written; the rest keep
/// their stored values.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 2, message = "Name must have at least 2 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

/// Query parameters for listing users.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserFilterParams {
    /// Case-insensitive substring match on the name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

/// Confirmation body for updates and deletes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(UserRole::Student).unwrap(),
            serde_json::json!("student")
        );
        assert_eq!(
            serde_json::to_value(UserRole::Manager).unwrap(),
            serde_json::json!("manager")
        );
    }

    #[test]
    fn user_role_rejects_unknown_values() {
        assert!(serde_json::from_str::<UserRole>(r#""admin""#).is_err());
    }

    #[test]
    fn user_serializes_without_a_password_key() {
        let user = User {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            role: UserRole::Student,
        };

        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("john@example.com"));
        assert!(!serialized.contains("password"));
    }

    #[test]
    fn create_user_dto_role_is_optional() {
        let json = r#"{"name":"Jane Smith","email":"jane@test.com","password":"password123"}"#;
        let dto: CreateUserDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.name, "Jane Smith");
        assert_eq!(dto.role, None);
        assert_eq!(dto.role.unwrap_or_default(), UserRole::Student);
    }

    #[test]
    fn create_user_dto_validation() {
        let valid = CreateUserDto {
            name: "Jane Smith".to_string(),
            email: "jane@test.com".to_string(),
            password: "password123".to_string(),
            role: Some(UserRole::Manager),
        };
        assert!(valid.validate().is_ok());

        let short_name = CreateUserDto {
            name: "J".to_string(),
            ..valid.clone()
        };
        assert!(short_name.validate().is_err());

        let bad_email = CreateUserDto {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = CreateUserDto {
            password: "12345".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn update_user_dto_treats_empty_strings_as_absent() {
        let json = r#"{"name":"","email":"","password":""}"#;
        let dto: UpdateUserDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.name, None);
        assert_eq!(dto.email, None);
        assert_eq!(dto.password, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_user_dto_allows_a_partial_body() {
        let json = r#"{"name":"New Name"}"#;
        let dto: UpdateUserDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.name.as_deref(), Some("New Name"));
        assert_eq!(dto.email, None);
        assert_eq!(dto.password, None);
        assert_eq!(dto.role, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_user_dto_still_validates_present_values() {
        let json = r#"{"name":"X"}"#;
        let dto: UpdateUserDto = serde_json::from_str(json).unwrap();
        assert!(dto.validate().is_err());

        let json = r#"{"email":"nope"}"#;
        let dto: UpdateUserDto = serde_json::from_str(json).unwrap();
        assert!(dto.validate().is_err());
    }
}
