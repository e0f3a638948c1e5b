//! User service - registration data and merge updates for users.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateUser, Password, User, UserPatch, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::services::validation::{check_username_length, require_id, required_text};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Get user by username
    async fn get_user_by_username(&self, username: &str) -> AppResult<User>;

    /// Create a new user from a registration request
    async fn create_user(&self, request: CreateUser) -> AppResult<UserResponse>;

    /// Apply a partial update to a user
    async fn update_user(&self, id: Uuid, patch: UserPatch) -> AppResult<UserResponse>;

    /// Delete a user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        require_id(id, "User")?;

        self.repo.find_by_id(id).await?.ok_or_not_found("User")
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        required_text(Some(username), "Username")?;

        self.repo
            .find_by_username(username)
            .await?
            .ok_or_not_found("User")
    }

    /// Creation is strict: every field must be present and non-empty, with
    /// the null-vs-empty distinction kept in the error detail.
    async fn create_user(&self, request: CreateUser) -> AppResult<UserResponse> {
        let username = required_text(request.username.as_deref(), "Username")?.to_string();
        let email = required_text(request.email.as_deref(), "User email")?.to_string();
        let password = required_text(request.password.as_deref(), "User password")?;

        check_username_length(&username)?;

        let password_hash = Password::new(password)?.into_string();

        // Friendly pre-check; the storage unique constraints remain the
        // authoritative guard against concurrent registration.
        if self
            .repo
            .exists_by_username_or_email(&username, &email)
            .await?
        {
            return Err(AppError::conflict("User"));
        }

        let created = self
            .repo
            .create(User::new(username, email, password_hash))
            .await?;
        tracing::info!(user_id = %created.id, "user created");

        Ok(UserResponse::from(created))
    }

    /// Update is forgiving: absent, null and empty fields leave the stored
    /// value untouched. Username and email are only probed for collisions
    /// when they actually change.
    async fn update_user(&self, id: Uuid, patch: UserPatch) -> AppResult<UserResponse> {
        require_id(id, "User")?;

        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found("User")?;

        if let Some(username) = patch.username.non_empty() {
            if username != user.username {
                check_username_length(username)?;
                if self.repo.is_username_taken(username, user.id).await? {
                    return Err(AppError::conflict("User with this username"));
                }
                user.username = username.to_string();
            }
        }

        if let Some(email) = patch.email.non_empty() {
            if email != user.email {
                if self.repo.is_email_taken(email, user.id).await? {
                    return Err(AppError::conflict("User with this email"));
                }
                user.email = email.to_string();
            }
        }

        if let Some(password) = patch.password.non_empty() {
            user.password_hash = Password::new(password)?.into_string();
        }

        let updated = self.repo.merge_update(user).await?;

        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        require_id(id, "User")?;

        self.repo.find_by_id(id).await?.ok_or_not_found("User")?;
        self.repo.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");

        Ok(())
    }
}
