//! Credential issuance and verification.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use socialhub_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use socialhub_auth::password::PasswordHasher;
use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_database::repositories::UserRepository;
use socialhub_entity::user::User;

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated account.
    pub user: User,
    /// Freshly issued tokens.
    pub tokens: TokenPair,
}

/// Registers accounts and exchanges credentials for tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token signer.
    encoder: Arc<JwtEncoder>,
    /// Token validator (for refresh tokens).
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Creates an account with an Argon2id-hashed password.
    ///
    /// A taken username is reported as `Conflict`.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))??;

        let user = self.user_repo.create(username, &hash).await?;
        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verifies credentials and issues an access/refresh token pair.
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self.user_repo.find_by_username(username).await?;

        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let verified = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => hasher.verify_password(&password, &hash),
            None => Ok(hasher.verify_dummy(&password)),
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))??;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                warn!(username, "Failed login attempt");
                return Err(AppError::authentication(INVALID_CREDENTIALS));
            }
        };

        let tokens = self.encoder.generate_token_pair(user.id)?;
        info!(user_id = %user.id, "User logged in");
        Ok(LoginOutcome { user, tokens })
    }

    /// Exchanges a valid refresh token for a new access token.
    ///
    /// Fails with `Authentication` if the token is invalid or the account
    /// no longer exists.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(String, DateTime<Utc>)> {
        let claims = self.decoder.decode_refresh_token(refresh_token).map_err(|e| {
            warn!(stage = e.stage(), reason = %e, "Refresh token rejected");
            AppError::from(e)
        })?;

        if !self.user_repo.exists(claims.user_id()).await? {
            warn!(user_id = %claims.user_id(), "Refresh token for deleted account");
            return Err(AppError::authentication("Unauthorized"));
        }

        self.encoder.generate_access_token(claims.user_id())
    }
}
