//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use socialhub_core::config::AuthConfig;
use socialhub_core::error::AppError;
use socialhub_core::types::id::UserId;

use super::claims::{Claims, TokenType};

/// Creates signed HS256 access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in seconds.
    access_ttl_seconds: i64,
    /// Refresh token TTL in seconds.
    refresh_ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_seconds: config.access_ttl_seconds(),
            refresh_ttl_seconds: config.refresh_ttl_seconds(),
        }
    }

    /// Generates a new access + refresh token pair for the given user.
    pub fn generate_token_pair(&self, user_id: UserId) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let access = Claims::new(user_id, TokenType::Access, now, self.access_ttl_seconds);
        let refresh = Claims::new(user_id, TokenType::Refresh, now, self.refresh_ttl_seconds);

        Ok(TokenPair {
            access_token: self.sign(&access)?,
            refresh_token: self.sign(&refresh)?,
            access_expires_at: now + chrono::Duration::seconds(self.access_ttl_seconds),
            refresh_expires_at: now + chrono::Duration::seconds(self.refresh_ttl_seconds),
        })
    }

    /// Generates a standalone access token (e.g., after refresh).
    pub fn generate_access_token(
        &self,
        user_id: UserId,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let claims = Claims::new(user_id, TokenType::Access, now, self.access_ttl_seconds);
        let token = self.sign(&claims)?;
        Ok((token, now + chrono::Duration::seconds(self.access_ttl_seconds)))
    }

    /// Sign arbitrary claims. Exposed for tests that need crafted tokens.
    pub fn sign<T: serde::Serialize>(&self, claims: &T) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
