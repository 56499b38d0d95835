//! Role handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use socialhub_core::types::id::RoleId;
use socialhub_entity::role::Role;

use crate::dto::request::RoleRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /roles
pub async fn create_role(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<RoleRequest>,
) -> Result<(StatusCode, Json<Role>), ApiError> {
    let role = state.role_service.create(&auth, &req.role_type).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /roles
pub async fn list_roles(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Role>>, ApiError> {
    Ok(Json(state.role_service.list().await?))
}

/// GET /roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath<RoleId>,
) -> Result<Json<Role>, ApiError> {
    Ok(Json(state.role_service.get(id).await?))
}

/// PUT /roles/{id}
pub async fn update_role(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<RoleId>,
    ValidatedJson(req): ValidatedJson<RoleRequest>,
) -> Result<Json<Role>, ApiError> {
    Ok(Json(state.role_service.update(&auth, id, &req.role_type).await?))
}

/// DELETE /roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<RoleId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.role_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Role deleted successfully")))
}
