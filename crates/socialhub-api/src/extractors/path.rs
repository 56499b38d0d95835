//! Typed path parameter extractor.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use socialhub_core::error::AppError;

use crate::error::ApiError;

/// A single numeric `{id}` path segment parsed into a typed id.
#[derive(Debug, Clone, Copy)]
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: FromStr + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        parse_id(&raw).map(IdPath).map_err(ApiError::from)
    }
}

/// Parses a path segment into a typed id.
pub fn parse_id<T: FromStr>(raw: &str) -> Result<T, AppError> {
    raw.parse::<T>()
        .map_err(|_| AppError::validation(format!("Invalid id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialhub_core::types::id::PostId;

    #[test]
    fn test_parse_id() {
        let id: PostId = parse_id("42").unwrap();
        assert_eq!(id.get(), 42);
        assert!(parse_id::<PostId>("abc").is_err());
    }
}
