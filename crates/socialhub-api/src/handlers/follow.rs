//! Follow graph handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use socialhub_core::types::id::UserId;
use socialhub_entity::follow::Follow;

use crate::dto::request::FollowRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /follow
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<FollowRequest>,
) -> Result<(StatusCode, Json<Follow>), ApiError> {
    let follow = state.follow_service.follow(&auth, req.following_id).await?;
    Ok((StatusCode::CREATED, Json(follow)))
}

/// DELETE /unfollow/{id}
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(target): IdPath<UserId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.follow_service.unfollow(&auth, target).await?;
    Ok(Json(MessageResponse::new("Unfollowed successfully")))
}

/// GET /followers/{id}
pub async fn followers(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath<UserId>,
) -> Result<Json<Vec<Follow>>, ApiError> {
    Ok(Json(state.follow_service.followers(user_id).await?))
}

/// GET /followings/{id}
pub async fn followings(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath<UserId>,
) -> Result<Json<Vec<Follow>>, ApiError> {
    Ok(Json(state.follow_service.followings(user_id).await?))
}
