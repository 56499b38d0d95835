//! Analytics handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use socialhub_core::types::id::PostId;
use socialhub_entity::analytics::{EngagementMetrics, PostView};

use crate::dto::request::TrackViewRequest;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /track-post-view
pub async fn track_post_view(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<TrackViewRequest>,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let view = state.analytics_service.track_view(&auth, req.post_id).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /post-analytics/{id}
pub async fn post_analytics(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<PostId>,
) -> Result<Json<EngagementMetrics>, ApiError> {
    Ok(Json(state.analytics_service.post_metrics(&auth, post_id).await?))
}
