//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use socialhub_core::config::AuthConfig;

use super::claims::{Claims, RawClaims, TokenType};
use super::error::TokenError;

/// Validates JWT tokens issued by [`super::JwtEncoder`].
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks, in order:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. `sub`, `authorized`, and `token_type` claims (`jti` only if present)
    /// 4. Token type is access
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_typed(token, TokenType::Access)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_typed(token, TokenType::Refresh)
    }

    fn decode_typed(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::Missing);
        }

        let data = decode::<RawClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = Claims::try_from(data.claims)?;

        if claims.token_type != expected {
            return Err(TokenError::WrongType { expected });
        }
        Ok(claims)
    }
}
