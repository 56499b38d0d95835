//! Post repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use socialhub_core::result::AppResult;
use socialhub_core::types::id::{PostId, UserId};
use socialhub_core::types::pagination::{PageRequest, PageResponse};
use socialhub_entity::post::Post;

use super::contains_pattern;
use crate::error::{classify, db};

/// Repository for post CRUD operations.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a post authored by `user_id`.
    pub async fn create(
        &self,
        user_id: UserId,
        content: &str,
        schedule_time: Option<DateTime<Utc>>,
    ) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (user_id, content, schedule_time) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(content)
        .bind(schedule_time)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to create post", "Post already exists"))
    }

    /// Find a post by ID.
    pub async fn find_by_id(&self, id: PostId) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find post"))
    }

    /// Check whether a post exists.
    pub async fn exists(&self, id: PostId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to check post existence"))
    }

    /// List all posts, newest first.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Post>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to count posts"))?;

        let posts = sqlx::query_as::<_, Post>(
            "SELECT * FROM posts ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list posts"))?;

        Ok(PageResponse::new(posts, page, total as u64))
    }

    /// Replace the content of a post.
    pub async fn update_content(&self, id: PostId, content: &str) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>(
            "UPDATE posts SET content = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to edit post"))
    }

    /// Delete a post. Returns whether a row was removed.
    pub async fn delete(&self, id: PostId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db("Failed to delete post"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Posts whose content contains `keyword`, newest first.
    pub async fn search(&self, keyword: &str, limit: i64) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>(
            "SELECT * FROM posts WHERE content LIKE $1 ESCAPE '\\' \
             ORDER BY created_at DESC LIMIT $2",
        )
        .bind(contains_pattern(keyword))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to search posts"))
    }
}
