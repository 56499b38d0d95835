//! Route definitions for the SocialHub HTTP API.
//!
//! Routes are grouped by domain. Everything except the auth entry points,
//! the health check, and static uploads sits behind the session gate.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Headroom above the upload limit for multipart framing.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let config = &state.config;
    let body_limit = config.storage.max_upload_size_bytes as usize + MULTIPART_OVERHEAD;
    let timeout = config.server.request_timeout();
    let cors = build_cors_layer(&config.server.cors);
    let uploads = ServeDir::new(&config.storage.upload_dir);
    let public_path = config.storage.public_path.trim_end_matches('/').to_string();

    let protected = Router::new()
        .merge(profile_routes())
        .merge(post_routes())
        .merge(engagement_routes())
        .merge(notification_routes())
        .merge(follow_routes())
        .merge(search_routes())
        .merge(analytics_routes())
        .merge(company_routes())
        .merge(role_routes())
        .merge(upload_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(auth_routes())
        .merge(health_routes())
        .merge(protected)
        .nest_service(&public_path, uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Public credential endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/logout", post(handlers::auth::logout))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(handlers::auth::profile))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/create-post", post(handlers::post::create_post))
        .route("/edit-post/{id}", put(handlers::post::edit_post))
        .route("/posts", get(handlers::post::list_posts))
        .route(
            "/posts/{id}",
            get(handlers::post::get_post).delete(handlers::post::delete_post),
        )
}

/// `GET /engagements/{id}` lists by post id; `PUT`/`DELETE` address one engagement.
fn engagement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/engagements",
            post(handlers::engagement::create_engagement),
        )
        .route(
            "/engagements/{id}",
            put(handlers::engagement::update_engagement)
                .delete(handlers::engagement::delete_engagement)
                .get(handlers::engagement::list_post_engagements),
        )
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            post(handlers::notification::send_notification)
                .get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/{id}/read",
            patch(handlers::notification::mark_read),
        )
}

fn follow_routes() -> Router<AppState> {
    Router::new()
        .route("/follow", post(handlers::follow::follow))
        .route("/unfollow/{id}", delete(handlers::follow::unfollow))
        .route("/followers/{id}", get(handlers::follow::followers))
        .route("/followings/{id}", get(handlers::follow::followings))
}

fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search/posts", post(handlers::search::search_posts))
        .route("/search/users", post(handlers::search::search_users))
}

fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/track-post-view",
            post(handlers::analytics::track_post_view),
        )
        .route(
            "/post-analytics/{id}",
            get(handlers::analytics::post_analytics),
        )
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", post(handlers::company::create_company))
        .route("/companies/leave", post(handlers::company::leave_company))
        .route(
            "/companies/{id}",
            get(handlers::company::get_company)
                .put(handlers::company::update_company)
                .delete(handlers::company::delete_company),
        )
        .route("/companies/{id}/join", post(handlers::company::join_company))
}

fn role_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/roles",
            post(handlers::role::create_role).get(handlers::role::list_roles),
        )
        .route(
            "/roles/{id}",
            get(handlers::role::get_role)
                .put(handlers::role::update_role)
                .delete(handlers::role::delete_role),
        )
}

fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::upload::upload_file))
        .route("/files", get(handlers::upload::list_files))
}
