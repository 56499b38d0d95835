//! Auth handlers: register, login, refresh, logout, profile.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;

use socialhub_core::error::AppError;

use crate::cookies::{
    ACCESS_COOKIE, REFRESH_COOKIE, REFRESH_PATH, access_cookie, refresh_cookie, removal_cookie,
};
use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{
    LoginResponse, MessageResponse, ProfileResponse, RefreshResponse, RegisterResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let user = state
        .auth_service
        .register(&req.username, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: user.id,
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    let outcome = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    let auth_config = &state.config.auth;
    let tokens = outcome.tokens;
    let jar = jar
        .add(access_cookie(tokens.access_token.clone(), auth_config))
        .add(refresh_cookie(tokens.refresh_token.clone(), auth_config));

    let expose = auth_config.return_tokens_in_body;
    let body = LoginResponse {
        message: "Login successful".to_string(),
        user_id: outcome.user.id,
        access_token: expose.then_some(tokens.access_token),
        refresh_token: expose.then_some(tokens.refresh_token),
        access_expires_at: tokens.access_expires_at,
        refresh_expires_at: tokens.refresh_expires_at,
    };

    Ok((jar, Json(body)))
}

/// POST /refresh
///
/// Reads the refresh token from the JSON body if present, otherwise from
/// the `refresh_token` cookie.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<RefreshResponse>), ApiError> {
    let from_body = if body.is_empty() {
        RefreshRequest::default()
    } else {
        serde_json::from_slice::<RefreshRequest>(&body)
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?
    };

    let token = from_body
        .refresh_token
        .or_else(|| jar.get(REFRESH_COOKIE).map(|c| c.value().to_owned()))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::authentication("Unauthorized"))?;

    let (access_token, access_expires_at) = state.auth_service.refresh(&token).await?;

    let auth_config = &state.config.auth;
    let jar = jar.add(access_cookie(access_token.clone(), auth_config));

    Ok((
        jar,
        Json(RefreshResponse {
            access_token: auth_config.return_tokens_in_body.then_some(access_token),
            access_expires_at,
        }),
    ))
}

/// POST /logout
///
/// Tokens are stateless, so this only tells the browser to drop them.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let auth_config = &state.config.auth;
    let jar = jar
        .add(removal_cookie(ACCESS_COOKIE, "/", auth_config))
        .add(removal_cookie(REFRESH_COOKIE, REFRESH_PATH, auth_config));

    (jar, Json(MessageResponse::new("Logged out successfully")))
}

/// GET /profile
pub async fn profile(auth: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user_id: auth.user_id,
    })
}
