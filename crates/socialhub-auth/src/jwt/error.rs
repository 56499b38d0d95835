//! Token validation failures.

use socialhub_core::error::{AppError, ErrorKind};
use thiserror::Error;

use super::claims::TokenType;

/// Why a token was rejected.
///
/// The distinction is for server-side diagnostics only. Every variant maps
/// to the same `401 Unauthorized` response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No token was presented.
    #[error("token not present")]
    Missing,
    /// The token could not be parsed as a JWT.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not verify against the signing secret.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The `exp` claim is in the past.
    #[error("token has expired")]
    Expired,
    /// A required claim is absent or has the wrong shape.
    #[error("claim `{0}` is missing or invalid")]
    InvalidClaim(&'static str),
    /// A refresh token was presented where an access token is required,
    /// or vice versa.
    #[error("expected a {expected} token")]
    WrongType {
        /// The token type the caller required.
        expected: TokenType,
    },
}

impl TokenError {
    /// The validation stage that failed, for structured logs.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Missing => "extract",
            Self::Malformed | Self::InvalidSignature => "signature",
            Self::Expired => "expiry",
            Self::InvalidClaim(_) | Self::WrongType { .. } => "claims",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind as JwtErrorKind;

        match err.kind() {
            JwtErrorKind::ExpiredSignature => Self::Expired,
            JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
                Self::InvalidSignature
            }
            JwtErrorKind::MissingRequiredClaim(_) => Self::InvalidClaim("exp"),
            _ => Self::Malformed,
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::with_source(ErrorKind::Authentication, "Unauthorized", err)
    }
}
