//! Post view and metrics repository implementation.

use sqlx::PgPool;

use socialhub_core::result::AppResult;
use socialhub_core::types::id::{PostId, UserId};
use socialhub_entity::analytics::{EngagementMetrics, PostView};

use crate::error::{classify, db};

/// Repository for post views and metrics snapshots.
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    /// Create a new analytics repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record one view of a post by `user_id`.
    pub async fn record_view(&self, post_id: PostId, user_id: UserId) -> AppResult<PostView> {
        sqlx::query_as::<_, PostView>(
            "INSERT INTO post_views (post_id, user_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to track post view", "View already recorded"))
    }

    /// Number of recorded views of a post.
    pub async fn count_views(&self, post_id: PostId) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM post_views WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to count post views"))
    }

    /// Persist a metrics snapshot.
    pub async fn save_metrics(
        &self,
        post_id: PostId,
        user_id: UserId,
        likes: i64,
        comments: i64,
        views: i64,
    ) -> AppResult<EngagementMetrics> {
        sqlx::query_as::<_, EngagementMetrics>(
            "INSERT INTO engagement_metrics (post_id, user_id, likes, comments, views) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(post_id)
        .bind(user_id)
        .bind(likes)
        .bind(comments)
        .bind(views)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to save engagement metrics", "Metrics already saved"))
    }
}
