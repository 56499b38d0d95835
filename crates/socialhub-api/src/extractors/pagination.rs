//! Pagination query parameter extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};

use socialhub_core::error::AppError;
use socialhub_core::types::pagination::PageRequest;

use crate::error::ApiError;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 20, max: 100).
    pub per_page: Option<u64>,
}

impl PaginationParams {
    /// Converts to a clamped `PageRequest`. Pages past
    /// [`PageRequest::MAX_PAGE`] are a validation error.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        let defaults = PageRequest::default();
        let page = self.page.unwrap_or(defaults.page);
        if page > PageRequest::MAX_PAGE {
            return Err(AppError::validation(format!(
                "page must be at most {}",
                PageRequest::MAX_PAGE
            )));
        }
        Ok(PageRequest::new(
            page,
            self.per_page.unwrap_or(defaults.per_page),
        ))
    }
}

/// Extracts `?page=&per_page=` as a [`PageRequest`].
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Pagination(params.into_page_request()?))
    }
}
