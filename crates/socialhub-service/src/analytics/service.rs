//! Post view tracking and engagement metrics.

use std::sync::Arc;

use tracing::debug;

use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_core::types::id::PostId;
use socialhub_database::repositories::{AnalyticsRepository, EngagementRepository, PostRepository};
use socialhub_entity::analytics::{EngagementMetrics, PostView};

use crate::context::RequestContext;

/// Records views and computes per-post counters.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    analytics_repo: Arc<AnalyticsRepository>,
    post_repo: Arc<PostRepository>,
    engagement_repo: Arc<EngagementRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(
        analytics_repo: Arc<AnalyticsRepository>,
        post_repo: Arc<PostRepository>,
        engagement_repo: Arc<EngagementRepository>,
    ) -> Self {
        Self {
            analytics_repo,
            post_repo,
            engagement_repo,
        }
    }

    /// Records that the caller viewed a post.
    pub async fn track_view(&self, ctx: &RequestContext, post_id: PostId) -> AppResult<PostView> {
        self.ensure_post(post_id).await?;
        let view = self.analytics_repo.record_view(post_id, ctx.user_id).await?;
        debug!(post_id = %post_id, viewer = %ctx.user_id, "Post view tracked");
        Ok(view)
    }

    /// Counts likes, comments, and views for a post and persists the
    /// snapshot on behalf of the caller.
    pub async fn post_metrics(
        &self,
        ctx: &RequestContext,
        post_id: PostId,
    ) -> AppResult<EngagementMetrics> {
        self.ensure_post(post_id).await?;

        let (likes, comments, views) = tokio::try_join!(
            self.engagement_repo.count_likes(post_id),
            self.engagement_repo.count_comments(post_id),
            self.analytics_repo.count_views(post_id),
        )?;

        self.analytics_repo
            .save_metrics(post_id, ctx.user_id, likes, comments, views)
            .await
    }

    async fn ensure_post(&self, post_id: PostId) -> AppResult<()> {
        if self.post_repo.exists(post_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Post not found"))
        }
    }
}
