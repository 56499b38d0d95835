//! Application builder: wires repositories, services, and the router.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use socialhub_auth::jwt::{JwtDecoder, JwtEncoder};
use socialhub_auth::password::PasswordHasher;
use socialhub_core::config::AppConfig;
use socialhub_core::error::AppError;
use socialhub_database::connection::DatabasePool;
use socialhub_database::repositories::{
    AnalyticsRepository, CompanyRepository, EngagementRepository, FollowRepository,
    NotificationRepository, PostRepository, RoleRepository, UserRepository,
};
use socialhub_service::{
    AnalyticsService, AuthService, CompanyService, EngagementService, FollowService,
    NotificationService, PostService, RoleService, SearchService, UploadService,
};
use socialhub_storage::LocalStorageProvider;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs every repository and service on top of `db`.
///
/// Creates the upload directory if needed; nothing here touches the
/// database, so a lazily connected pool works.
pub async fn build_state(config: AppConfig, db: DatabasePool) -> Result<AppState, AppError> {
    let pool = db.pool().clone();

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let post_repo = Arc::new(PostRepository::new(pool.clone()));
    let engagement_repo = Arc::new(EngagementRepository::new(pool.clone()));
    let follow_repo = Arc::new(FollowRepository::new(pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(pool.clone()));
    let company_repo = Arc::new(CompanyRepository::new(pool.clone()));
    let role_repo = Arc::new(RoleRepository::new(pool.clone()));
    let analytics_repo = Arc::new(AnalyticsRepository::new(pool));

    // ── Auth ─────────────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Storage ──────────────────────────────────────────────────
    let storage = Arc::new(LocalStorageProvider::new(&config.storage.upload_dir).await?);

    // ── Services ─────────────────────────────────────────────────
    let notification_service = Arc::new(NotificationService::new(
        Arc::clone(&notification_repo),
        Arc::clone(&user_repo),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        hasher,
        jwt_encoder,
        Arc::clone(&jwt_decoder),
    ));
    let post_service = Arc::new(PostService::new(Arc::clone(&post_repo)));
    let engagement_service = Arc::new(EngagementService::new(
        Arc::clone(&engagement_repo),
        Arc::clone(&post_repo),
        Arc::clone(&user_repo),
        Arc::clone(&notification_service),
    ));
    let follow_service = Arc::new(FollowService::new(
        follow_repo,
        Arc::clone(&user_repo),
        Arc::clone(&notification_service),
    ));
    let search_service = Arc::new(SearchService::new(
        Arc::clone(&post_repo),
        Arc::clone(&user_repo),
    ));
    let analytics_service = Arc::new(AnalyticsService::new(
        analytics_repo,
        Arc::clone(&post_repo),
        engagement_repo,
    ));
    let company_service = Arc::new(CompanyService::new(company_repo, Arc::clone(&user_repo)));
    let role_service = Arc::new(RoleService::new(role_repo));
    let upload_service = Arc::new(UploadService::new(storage, config.storage.clone()));

    Ok(AppState {
        config: Arc::new(config),
        db,
        jwt_decoder,
        auth_service,
        post_service,
        engagement_service,
        notification_service,
        follow_service,
        search_service,
        analytics_service,
        company_service,
        role_service,
        upload_service,
    })
}

/// Runs the SocialHub server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db.clone()).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("SocialHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    info!("SocialHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, starting graceful shutdown...");
}
