//! Following and unfollowing users.

use std::sync::Arc;

use tracing::info;

use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_core::types::id::UserId;
use socialhub_database::repositories::{FollowRepository, UserRepository};
use socialhub_entity::follow::Follow;

use crate::context::RequestContext;
use crate::notification::NotificationService;
use crate::notification::rules;

/// Maintains the follow graph.
#[derive(Debug, Clone)]
pub struct FollowService {
    follow_repo: Arc<FollowRepository>,
    user_repo: Arc<UserRepository>,
    notifications: Arc<NotificationService>,
}

impl FollowService {
    /// Creates a new follow service.
    pub fn new(
        follow_repo: Arc<FollowRepository>,
        user_repo: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            follow_repo,
            user_repo,
            notifications,
        }
    }

    /// The caller starts following `target`.
    ///
    /// Following yourself is a validation error, a missing target is
    /// `NotFound`, and an existing edge is `Conflict`.
    pub async fn follow(&self, ctx: &RequestContext, target: UserId) -> AppResult<Follow> {
        if target == ctx.user_id {
            return Err(AppError::validation("You cannot follow yourself"));
        }
        if !self.user_repo.exists(target).await? {
            return Err(AppError::not_found("User not found"));
        }

        let follow = self.follow_repo.create(ctx.user_id, target).await?;
        info!(follower = %ctx.user_id, following = %target, "User followed");

        if let Some(follower) = self.user_repo.find_by_id(ctx.user_id).await? {
            self.notifications
                .notify(ctx.user_id, target, &rules::follow_message(&follower.username))
                .await;
        }
        Ok(follow)
    }

    /// The caller stops following `target`.
    pub async fn unfollow(&self, ctx: &RequestContext, target: UserId) -> AppResult<()> {
        if !self.follow_repo.delete(ctx.user_id, target).await? {
            return Err(AppError::not_found("You are not following this user"));
        }
        info!(follower = %ctx.user_id, following = %target, "User unfollowed");
        Ok(())
    }

    /// Users following `user_id`.
    pub async fn followers(&self, user_id: UserId) -> AppResult<Vec<Follow>> {
        self.follow_repo.followers(user_id).await
    }

    /// Users that `user_id` follows.
    pub async fn followings(&self, user_id: UserId) -> AppResult<Vec<Follow>> {
        self.follow_repo.followings(user_id).await
    }
}
