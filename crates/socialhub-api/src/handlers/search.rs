//! Search handlers.

use axum::Json;
use axum::extract::State;

use socialhub_entity::post::Post;
use socialhub_entity::user::User;

use crate::dto::request::SearchRequest;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /search/posts
pub async fn search_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SearchRequest>,
) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.search_service.search_posts(&req.keyword).await?))
}

/// POST /search/users
pub async fn search_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SearchRequest>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.search_service.search_users(&req.keyword).await?))
}
