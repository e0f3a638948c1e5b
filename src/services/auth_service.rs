//! Authentication service - token issue/verify, registration and login.
//!
//! Tokens are stateless: validity is a pure function of signature and
//! clock, so no store lookup happens on verification. There is no
//! revocation; logout is client-side token discardal.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::password::DUMMY_HASH;
use crate::domain::{CreateUser, Password};
use crate::errors::{AppError, AppResult};
use crate::services::UserService;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Signed access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and issue a token for it
    async fn register(&self, request: CreateUser) -> AppResult<TokenResponse>;

    /// Authenticate by username/password and issue a token
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse>;

    /// Issue a signed token for an already-authenticated principal
    fn issue_token(&self, principal: Uuid, username: &str) -> AppResult<TokenResponse>;

    /// Verify a token, yielding its claims.
    ///
    /// All-or-nothing: an expired token fails with [`AppError::TokenExpired`],
    /// anything else wrong with it fails with [`AppError::TokenMalformed`].
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
///
/// The signing keys are derived from process-wide configuration exactly
/// once, at construction.
pub struct Authenticator {
    users: Arc<dyn UserService>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_hours: i64,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserService>, config: &Config) -> Self {
        Self {
            users,
            encoding_key: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret_bytes()),
            token_ttl_hours: config.jwt_expiration_hours,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, request: CreateUser) -> AppResult<TokenResponse> {
        let created = self.users.create_user(request).await?;
        tracing::debug!(user_id = %created.id, "issuing token for new registration");

        self.issue_token(created.id, &created.username)
    }

    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse> {
        let user = match self.users.get_user_by_username(username).await {
            Ok(user) => Some(user),
            Err(AppError::NotFound(_)) => None,
            Err(err) => return Err(err),
        };

        // Verify against a dummy hash when the user does not exist, so a
        // missing account costs the same time as a wrong password.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::from_hash(DUMMY_HASH.to_string()),
        };
        let password_valid = stored.verify(password);

        match user {
            Some(user) if password_valid => self.issue_token(user.id, &user.username),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn issue_token(&self, principal: Uuid, username: &str) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.token_ttl_hours);

        let claims = Claims {
            sub: principal,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.token_ttl_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::TokenMalformed,
            })
    }
}
