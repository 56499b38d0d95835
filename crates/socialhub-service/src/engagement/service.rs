//! Likes and comments on posts.

use std::sync::Arc;

use tracing::info;

use socialhub_auth::ownership::ensure_owner;
use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_core::types::id::{EngagementId, PostId};
use socialhub_database::repositories::{EngagementRepository, PostRepository, UserRepository};
use socialhub_entity::engagement::Engagement;

use crate::context::RequestContext;
use crate::notification::NotificationService;
use crate::notification::rules;

/// Records engagements and notifies post authors.
#[derive(Debug, Clone)]
pub struct EngagementService {
    engagement_repo: Arc<EngagementRepository>,
    post_repo: Arc<PostRepository>,
    user_repo: Arc<UserRepository>,
    notifications: Arc<NotificationService>,
}

impl EngagementService {
    /// Creates a new engagement service.
    pub fn new(
        engagement_repo: Arc<EngagementRepository>,
        post_repo: Arc<PostRepository>,
        user_repo: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            engagement_repo,
            post_repo,
            user_repo,
            notifications,
        }
    }

    /// Likes and/or comments on a post as the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        post_id: PostId,
        liked: bool,
        comment: Option<&str>,
    ) -> AppResult<Engagement> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        let comment = normalize_comment(comment);
        let engagement = self
            .engagement_repo
            .create(post_id, ctx.user_id, liked, comment)
            .await?;
        info!(engagement_id = %engagement.id, post_id = %post_id, "Engagement created");

        if post.user_id != ctx.user_id {
            let actor = self
                .user_repo
                .find_by_id(ctx.user_id)
                .await?
                .map(|u| u.username)
                .unwrap_or_else(|| "Someone".to_string());
            if let Some(message) =
                rules::engagement_message(&actor, engagement.liked, engagement.has_comment())
            {
                self.notifications
                    .notify(ctx.user_id, post.user_id, &message)
                    .await;
            }
        }

        Ok(engagement)
    }

    /// Replaces the like flag and comment of the caller's engagement.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: EngagementId,
        liked: bool,
        comment: Option<&str>,
    ) -> AppResult<Engagement> {
        let engagement = self.get(id).await?;
        ensure_owner(ctx.user_id, &engagement, "update this engagement")?;

        self.engagement_repo
            .update(id, liked, normalize_comment(comment))
            .await?
            .ok_or_else(|| AppError::not_found("Engagement not found"))
    }

    /// Deletes the caller's engagement.
    pub async fn delete(&self, ctx: &RequestContext, id: EngagementId) -> AppResult<()> {
        let engagement = self.get(id).await?;
        ensure_owner(ctx.user_id, &engagement, "delete this engagement")?;

        if !self.engagement_repo.delete(id).await? {
            return Err(AppError::not_found("Engagement not found"));
        }
        info!(engagement_id = %id, "Engagement deleted");
        Ok(())
    }

    /// All engagements on an existing post.
    pub async fn list_for_post(&self, post_id: PostId) -> AppResult<Vec<Engagement>> {
        if !self.post_repo.exists(post_id).await? {
            return Err(AppError::not_found("Post not found"));
        }
        self.engagement_repo.list_for_post(post_id).await
    }

    async fn get(&self, id: EngagementId) -> AppResult<Engagement> {
        self.engagement_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Engagement not found"))
    }
}

/// Blank comments are stored as no comment.
fn normalize_comment(comment: Option<&str>) -> Option<&str> {
    comment.map(str::trim).filter(|c| !c.is_empty())
}
