//! Session cookie construction.

use axum_extra::extract::cookie::{Cookie, SameSite};

use socialhub_core::config::AuthConfig;

/// Cookie carrying the access token; read by the session gate.
pub const ACCESS_COOKIE: &str = "access_token";
/// Cookie carrying the refresh token; only sent to the refresh endpoint.
pub const REFRESH_COOKIE: &str = "refresh_token";
/// Path the refresh cookie is scoped to.
pub const REFRESH_PATH: &str = "/refresh";

/// Builds the HTTP-only access token cookie.
pub fn access_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    build(ACCESS_COOKIE, token, "/", config.access_ttl_seconds(), config)
}

/// Builds the HTTP-only refresh token cookie.
pub fn refresh_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    build(
        REFRESH_COOKIE,
        token,
        REFRESH_PATH,
        config.refresh_ttl_seconds(),
        config,
    )
}

/// Builds an expired cookie that makes the browser drop `name`.
pub fn removal_cookie(
    name: &'static str,
    path: &'static str,
    config: &AuthConfig,
) -> Cookie<'static> {
    build(name, String::new(), path, 0, config)
}

fn build(
    name: &'static str,
    value: String,
    path: &'static str,
    max_age_seconds: i64,
    config: &AuthConfig,
) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path(path)
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age_seconds));

    // Host-only unless a domain is configured.
    if let Some(domain) = config.cookie_domain.clone() {
        builder = builder.domain(domain);
    }
    builder.build()
}
