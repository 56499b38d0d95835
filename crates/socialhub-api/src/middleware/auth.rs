//! Session gate: validates the access token cookie on protected routes.

use axum::extract::{Request, State};
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use tracing::debug;

use socialhub_auth::jwt::TokenError;
use socialhub_core::error::AppError;
use socialhub_service::context::RequestContext;

use crate::cookies::ACCESS_COOKIE;
use crate::error::ApiError;
use crate::state::AppState;

/// Rejects requests without a valid `access_token` cookie and stores the
/// resolved [`RequestContext`] in the request extensions.
///
/// Every failure is a `401 {"error":"Unauthorized"}`; the precise
/// [`TokenError`] is only logged.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(ACCESS_COOKIE)
        .map(|c| c.value().to_owned())
        .ok_or(TokenError::Missing);

    let claims = token
        .and_then(|t| state.jwt_decoder.decode_access_token(&t))
        .map_err(|e| {
            debug!(
                stage = e.stage(),
                reason = %e,
                path = %request.uri().path(),
                "Session gate rejected request"
            );
            AppError::from(e)
        })?;

    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let ctx = RequestContext::new(claims.user_id(), claims.jti, user_agent);
    request.extensions_mut().insert(ctx);

    Ok(next.run(request).await)
}
