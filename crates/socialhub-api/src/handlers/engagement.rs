//! Engagement handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use socialhub_core::types::id::{EngagementId, PostId};
use socialhub_entity::engagement::Engagement;

use crate::dto::request::{CreateEngagementRequest, UpdateEngagementRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /engagements
pub async fn create_engagement(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateEngagementRequest>,
) -> Result<(StatusCode, Json<Engagement>), ApiError> {
    let engagement = state
        .engagement_service
        .create(&auth, req.post_id, req.liked, req.comment.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(engagement)))
}

/// PUT /engagements/{id}
pub async fn update_engagement(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<EngagementId>,
    ValidatedJson(req): ValidatedJson<UpdateEngagementRequest>,
) -> Result<Json<Engagement>, ApiError> {
    let engagement = state
        .engagement_service
        .update(&auth, id, req.liked, req.comment.as_deref())
        .await?;
    Ok(Json(engagement))
}

/// DELETE /engagements/{id}
pub async fn delete_engagement(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<EngagementId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.engagement_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Engagement deleted successfully")))
}

/// GET /engagements/{id}
///
/// Here `{id}` names the post whose engagements are listed.
pub async fn list_post_engagements(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> Result<Json<Vec<Engagement>>, ApiError> {
    Ok(Json(state.engagement_service.list_for_post(post_id).await?))
}
