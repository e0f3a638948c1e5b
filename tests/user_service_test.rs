//! User service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use taskboard_core::domain::{CreateUser, Password, Patch, User, UserPatch, UserRole};
use taskboard_core::errors::AppError;
use taskboard_core::infra::MockUserRepository;
use taskboard_core::services::{UserManager, UserService};

fn create_test_user(id: Uuid) -> User {
    User {
        id,
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        password_hash: "hashed".to_string(),
        role: UserRole::User,
    }
}

fn register_request(username: &str, email: &str, password: &str) -> CreateUser {
    CreateUser {
        username: Some(username.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

fn service(repo: MockUserRepository) -> UserManager {
    UserManager::new(Arc::new(repo))
}

#[tokio::test]
async fn test_get_user_success() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(move |id| Ok(Some(create_test_user(id))));

    let result = service(repo).get_user(user_id).await;

    assert_eq!(result.unwrap().id, user_id);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let err = service(repo).get_user(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_get_user_nil_id_fails_before_any_lookup() {
    let err = service(MockUserRepository::new())
        .get_user(Uuid::nil())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("User id can't be null"));
}

#[tokio::test]
async fn test_create_user_hashes_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_exists_by_username_or_email()
        .returning(|_, _| Ok(false));
    repo.expect_create()
        .withf(|user| {
            user.username == "alice"
                && user.password_hash != "pw12345678"
                && Password::from_hash(user.password_hash.clone()).verify("pw12345678")
        })
        .returning(|user| Ok(user));

    let response = service(repo)
        .create_user(register_request("alice", "a@x.com", "pw12345678"))
        .await
        .unwrap();

    assert_eq!(response.username, "alice");
    assert_eq!(response.role, "user");
}

#[tokio::test]
async fn test_create_user_null_username() {
    let request = CreateUser {
        username: None,
        email: Some("a@x.com".to_string()),
        password: Some("pw12345678".to_string()),
    };

    let err = service(MockUserRepository::new())
        .create_user(request)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Username can't be null"));
}

#[tokio::test]
async fn test_create_user_empty_email() {
    let err = service(MockUserRepository::new())
        .create_user(register_request("alice", "", "pw12345678"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("User email can't be empty"));
}

#[tokio::test]
async fn test_create_user_short_username() {
    let err = service(MockUserRepository::new())
        .create_user(register_request("ab", "a@x.com", "pw12345678"))
        .await
        .unwrap_err();

    assert!(err
        .to_string()
        .contains("Username should be from 3 to 32 characters long"));
}

#[tokio::test]
async fn test_create_user_short_password() {
    let err = service(MockUserRepository::new())
        .create_user(register_request("alice", "a@x.com", "pw2"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Password is too short"));
}

#[tokio::test]
async fn test_create_user_duplicate_fails_before_any_write() {
    let mut repo = MockUserRepository::new();
    repo.expect_exists_by_username_or_email()
        .returning(|_, _| Ok(true));
    // No expect_create: a write would panic the test

    let err = service(repo)
        .create_user(register_request("alice", "b@x.com", "pw12345678"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert!(err.to_string().contains("User already exists"));
}

#[tokio::test]
async fn test_update_user_taken_username_conflicts() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(move |id| Ok(Some(create_test_user(id))));
    repo.expect_is_username_taken().returning(|_, _| Ok(true));

    let patch = UserPatch {
        username: Patch::Value("bob".to_string()),
        ..Default::default()
    };
    let err = service(repo).update_user(user_id, patch).await.unwrap_err();

    assert!(err
        .to_string()
        .contains("User with this username already exists"));
}

#[tokio::test]
async fn test_update_user_unchanged_username_skips_probe() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(move |id| Ok(Some(create_test_user(id))));
    // No expect_is_username_taken: probing an unchanged value would panic
    repo.expect_merge_update()
        .withf(|user| user.username == "alice")
        .returning(|user| Ok(user));

    let patch = UserPatch {
        username: Patch::Value("alice".to_string()),
        ..Default::default()
    };

    assert!(service(repo).update_user(user_id, patch).await.is_ok());
}

#[tokio::test]
async fn test_update_user_empty_patch_changes_nothing() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(move |id| Ok(Some(create_test_user(id))));
    repo.expect_merge_update()
        .withf(|user| {
            user.username == "alice" && user.email == "a@x.com" && user.password_hash == "hashed"
        })
        .returning(|user| Ok(user));

    let patch = UserPatch {
        username: Patch::Unset,
        email: Patch::Cleared,
        password: Patch::Value(String::new()),
    };
    let response = service(repo).update_user(user_id, patch).await.unwrap();

    assert_eq!(response.username, "alice");
    assert_eq!(response.email, "a@x.com");
}

#[tokio::test]
async fn test_update_user_rehashes_new_password() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(move |id| Ok(Some(create_test_user(id))));
    repo.expect_merge_update()
        .withf(|user| Password::from_hash(user.password_hash.clone()).verify("newpass123"))
        .returning(|user| Ok(user));

    let patch = UserPatch {
        password: Patch::Value("newpass123".to_string()),
        ..Default::default()
    };

    assert!(service(repo).update_user(user_id, patch).await.is_ok());
}

#[tokio::test]
async fn test_update_user_applies_new_username_after_probe() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(move |id| Ok(Some(create_test_user(id))));
    repo.expect_is_username_taken()
        .withf(move |name, excluding| name == "bob" && *excluding == user_id)
        .returning(|_, _| Ok(false));
    repo.expect_merge_update()
        .withf(|user| user.username == "bob" && user.email == "a@x.com")
        .returning(|user| Ok(user));

    let patch = UserPatch {
        username: Patch::Value("bob".to_string()),
        ..Default::default()
    };
    let response = service(repo).update_user(user_id, patch).await.unwrap();

    assert_eq!(response.username, "bob");
}

#[tokio::test]
async fn test_delete_user_success() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(move |id| Ok(Some(create_test_user(id))));
    repo.expect_delete().with(eq(user_id)).returning(|_| Ok(()));

    assert!(service(repo).delete_user(user_id).await.is_ok());
}

#[tokio::test]
async fn test_delete_missing_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    // No expect_delete: deleting would panic the test

    let err = service(repo).delete_user(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}
