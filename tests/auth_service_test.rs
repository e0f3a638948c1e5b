//! Authentication service unit tests.

use std::sync::Arc;

use uuid::Uuid;

use taskboard_core::config::Config;
use taskboard_core::domain::{CreateUser, Password, User, UserResponse, UserRole};
use taskboard_core::errors::AppError;
use taskboard_core::services::{AuthService, Authenticator, MockUserService};

const TEST_SECRET: &str = "test-secret-key-of-at-least-32-chars";

fn test_config(expiration_hours: i64) -> Config {
    Config::new(
        "postgres://unused".to_string(),
        TEST_SECRET.to_string(),
        expiration_hours,
    )
}

fn create_test_user(id: Uuid, password: &str) -> User {
    User {
        id,
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        role: UserRole::User,
    }
}

#[tokio::test]
async fn test_token_round_trip() {
    let user_id = Uuid::new_v4();
    let service = Authenticator::new(Arc::new(MockUserService::new()), &test_config(24));

    let token = service.issue_token(user_id, "alice").unwrap();
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 24 * 3600);

    let claims = service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.username, "alice");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_expired_token_fails_as_expired() {
    let service = Authenticator::new(Arc::new(MockUserService::new()), &test_config(-1));

    let token = service.issue_token(Uuid::new_v4(), "alice").unwrap();
    let err = service.verify_token(&token.access_token).unwrap_err();

    assert!(matches!(err, AppError::TokenExpired));
}

#[tokio::test]
async fn test_garbage_token_fails_as_malformed() {
    let service = Authenticator::new(Arc::new(MockUserService::new()), &test_config(24));

    let err = service.verify_token("not-a-token").unwrap_err();

    assert!(matches!(err, AppError::TokenMalformed));
}

#[tokio::test]
async fn test_token_signed_with_other_key_fails_as_malformed() {
    let issuer = Authenticator::new(
        Arc::new(MockUserService::new()),
        &Config::new(
            "postgres://unused".to_string(),
            "another-secret-key-of-32-chars-min!!".to_string(),
            24,
        ),
    );
    let verifier = Authenticator::new(Arc::new(MockUserService::new()), &test_config(24));

    let token = issuer.issue_token(Uuid::new_v4(), "alice").unwrap();
    let err = verifier.verify_token(&token.access_token).unwrap_err();

    assert!(matches!(err, AppError::TokenMalformed));
}

#[tokio::test]
async fn test_login_success_issues_token() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserService::new();
    users
        .expect_get_user_by_username()
        .returning(move |_| Ok(create_test_user(user_id, "pw12345678")));

    let service = Authenticator::new(Arc::new(users), &test_config(24));
    let token = service.login("alice", "pw12345678").await.unwrap();

    let claims = service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, user_id);
}

#[tokio::test]
async fn test_login_wrong_password_fails() {
    let mut users = MockUserService::new();
    users
        .expect_get_user_by_username()
        .returning(|_| Ok(create_test_user(Uuid::new_v4(), "pw12345678")));

    let service = Authenticator::new(Arc::new(users), &test_config(24));
    let err = service.login("alice", "pw87654321").await.unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_user_fails_with_same_error() {
    let mut users = MockUserService::new();
    users
        .expect_get_user_by_username()
        .returning(|_| Err(AppError::not_found("User")));

    let service = Authenticator::new(Arc::new(users), &test_config(24));
    let err = service.login("nobody", "pw12345678").await.unwrap_err();

    // Never leaks whether the account exists
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_register_issues_token_for_created_user() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserService::new();
    users.expect_create_user().returning(move |_| {
        Ok(UserResponse {
            id: user_id,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
        })
    });

    let service = Authenticator::new(Arc::new(users), &test_config(24));
    let request = CreateUser {
        username: Some("alice".to_string()),
        email: Some("a@x.com".to_string()),
        password: Some("pw12345678".to_string()),
    };

    let token = service.register(request).await.unwrap();
    let claims = service.verify_token(&token.access_token).unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.username, "alice");
}

#[tokio::test]
async fn test_register_propagates_duplicate_user() {
    let mut users = MockUserService::new();
    users
        .expect_create_user()
        .returning(|_| Err(AppError::conflict("User")));

    let service = Authenticator::new(Arc::new(users), &test_config(24));
    let err = service.register(CreateUser::default()).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert!(err.to_string().contains("already exists"));
}
