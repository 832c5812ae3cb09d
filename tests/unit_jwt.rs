use axum::http::StatusCode;
use coursedeck::config::jwt::JwtConfig;
use coursedeck::modules::users::model::UserRole;
use coursedeck::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[test]
fn round_trip_preserves_subject_and_role() {
    let jwt_config = test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, UserRole::Manager, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, UserRole::Manager);
}

#[test]
fn both_roles_round_trip() {
    let jwt_config = test_jwt_config();

    for role in [UserRole::Student, UserRole::Manager] {
        let token = create_access_token(Uuid::new_v4(), role, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, role);
    }
}

#[test]
fn expiry_is_issuance_plus_configured_lifetime() {
    let jwt_config = test_jwt_config();

    let token = create_access_token(Uuid::new_v4(), UserRole::Student, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.exp - claims.iat, jwt_config.access_token_expiry);
}

#[test]
fn an_expired_token_is_rejected() {
    let expired_config = JwtConfig {
        access_token_expiry: -7200,
        ..test_jwt_config()
    };

    let token = create_access_token(Uuid::new_v4(), UserRole::Student, &expired_config).unwrap();
    let err = verify_token(&token, &expired_config).unwrap_err();

    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[test]
fn a_token_signed_with_another_secret_is_rejected() {
    let jwt_config = test_jwt_config();
    let token = create_access_token(Uuid::new_v4(), UserRole::Student, &jwt_config).unwrap();

    let other_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        ..jwt_config
    };

    let err = verify_token(&token, &other_config).unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[test]
fn malformed_tokens_are_rejected() {
    let jwt_config = test_jwt_config();
    let malformed_tokens = [
        "",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        let err = verify_token(token, &jwt_config).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED, "token {token:?}");
    }
}

#[test]
fn different_users_get_different_tokens() {
    let jwt_config = test_jwt_config();
    let user_id1 = Uuid::new_v4();
    let user_id2 = Uuid::new_v4();

    let token1 = create_access_token(user_id1, UserRole::Student, &jwt_config).unwrap();
    let token2 = create_access_token(user_id2, UserRole::Student, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();
    assert_eq!(claims1.sub, user_id1.to_string());
    assert_eq!(claims2.sub, user_id2.to_string());
}
