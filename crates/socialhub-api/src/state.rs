//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use socialhub_auth::jwt::JwtDecoder;
use socialhub_core::config::AppConfig;
use socialhub_database::connection::DatabasePool;
use socialhub_service::{
    AnalyticsService, AuthService, CompanyService, EngagementService, FollowService,
    NotificationService, PostService, RoleService, SearchService, UploadService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Access token validator used by the session gate
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    pub auth_service: Arc<AuthService>,
    pub post_service: Arc<PostService>,
    pub engagement_service: Arc<EngagementService>,
    pub notification_service: Arc<NotificationService>,
    pub follow_service: Arc<FollowService>,
    pub search_service: Arc<SearchService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub company_service: Arc<CompanyService>,
    pub role_service: Arc<RoleService>,
    pub upload_service: Arc<UploadService>,
}
