//! Notification handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use socialhub_core::types::id::NotificationId;
use socialhub_core::types::pagination::PageResponse;
use socialhub_entity::notification::Notification;

use crate::dto::request::SendNotificationRequest;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::state::AppState;

/// POST /notifications
pub async fn send_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SendNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>), ApiError> {
    let notification = state
        .notification_service
        .send(&auth, req.user_id, &req.message)
        .await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> Result<Json<PageResponse<Notification>>, ApiError> {
    Ok(Json(state.notification_service.list(&auth, page).await?))
}

/// PATCH /notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<NotificationId>,
) -> Result<Json<Notification>, ApiError> {
    Ok(Json(state.notification_service.mark_read(&auth, id).await?))
}
