//! Post handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use socialhub_core::types::id::PostId;
use socialhub_core::types::pagination::PageResponse;
use socialhub_entity::post::Post;

use crate::dto::request::{CreatePostRequest, EditPostRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::state::AppState;

/// POST /create-post
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state
        .post_service
        .create(&auth, &req.content, req.schedule_time)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /edit-post/{id}
pub async fn edit_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<PostId>,
    ValidatedJson(req): ValidatedJson<EditPostRequest>,
) -> Result<Json<Post>, ApiError> {
    let post = state.post_service.edit(&auth, id, &req.content).await?;
    Ok(Json(post))
}

/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
) -> Result<Json<PageResponse<Post>>, ApiError> {
    Ok(Json(state.post_service.list(page).await?))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath<PostId>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.post_service.get(id).await?))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<PostId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.post_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
