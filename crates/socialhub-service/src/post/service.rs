//! Post CRUD with owner-only mutation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use socialhub_auth::ownership::ensure_owner;
use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_core::types::id::PostId;
use socialhub_core::types::pagination::{PageRequest, PageResponse};
use socialhub_database::repositories::PostRepository;
use socialhub_entity::post::Post;

use crate::context::RequestContext;

/// Creates, edits, lists, and deletes posts.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Post repository.
    post_repo: Arc<PostRepository>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(post_repo: Arc<PostRepository>) -> Self {
        Self { post_repo }
    }

    /// Publishes a post authored by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        content: &str,
        schedule_time: Option<DateTime<Utc>>,
    ) -> AppResult<Post> {
        let post = self
            .post_repo
            .create(ctx.user_id, content, schedule_time)
            .await?;
        info!(post_id = %post.id, user_id = %ctx.user_id, "Post created");
        Ok(post)
    }

    /// Fetches a post or fails with `NotFound`.
    pub async fn get(&self, id: PostId) -> AppResult<Post> {
        self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))
    }

    /// Lists all posts, newest first.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Post>> {
        self.post_repo.list(page).await
    }

    /// Replaces the content of a post the caller owns.
    pub async fn edit(&self, ctx: &RequestContext, id: PostId, content: &str) -> AppResult<Post> {
        let post = self.get(id).await?;
        ensure_owner(ctx.user_id, &post, "edit this post")?;

        let post = self
            .post_repo
            .update_content(id, content)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;
        info!(post_id = %id, "Post edited");
        Ok(post)
    }

    /// Deletes a post the caller owns.
    pub async fn delete(&self, ctx: &RequestContext, id: PostId) -> AppResult<()> {
        let post = self.get(id).await?;
        ensure_owner(ctx.user_id, &post, "delete this post")?;

        if !self.post_repo.delete(id).await? {
            return Err(AppError::not_found("Post not found"));
        }
        info!(post_id = %id, "Post deleted");
        Ok(())
    }
}
