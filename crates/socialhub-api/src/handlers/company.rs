//! Company handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use socialhub_core::types::id::CompanyId;
use socialhub_entity::company::Company;
use socialhub_service::CompanyDetails;

use crate::dto::request::CompanyRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /companies
pub async fn create_company(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CompanyRequest>,
) -> Result<(StatusCode, Json<Company>), ApiError> {
    let company = state
        .company_service
        .create(&auth, &req.name, &req.description)
        .await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /companies/{id}
pub async fn get_company(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath<CompanyId>,
) -> Result<Json<CompanyDetails>, ApiError> {
    Ok(Json(state.company_service.get(id).await?))
}

/// PUT /companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<CompanyId>,
    ValidatedJson(req): ValidatedJson<CompanyRequest>,
) -> Result<Json<Company>, ApiError> {
    let company = state
        .company_service
        .update(&auth, id, &req.name, &req.description)
        .await?;
    Ok(Json(company))
}

/// DELETE /companies/{id}
pub async fn delete_company(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<CompanyId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.company_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Company deleted successfully")))
}

/// POST /companies/{id}/join
pub async fn join_company(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath<CompanyId>,
) -> Result<Json<CompanyDetails>, ApiError> {
    Ok(Json(state.company_service.join(&auth, id).await?))
}

/// POST /companies/leave
pub async fn leave_company(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    state.company_service.leave(&auth).await?;
    Ok(Json(MessageResponse::new("Left company successfully")))
}
