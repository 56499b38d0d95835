//! Engagement repository implementation.

use sqlx::PgPool;

use socialhub_core::result::AppResult;
use socialhub_core::types::id::{EngagementId, PostId, UserId};
use socialhub_entity::engagement::Engagement;

use crate::error::{classify, db};

/// Repository for likes and comments.
#[derive(Debug, Clone)]
pub struct EngagementRepository {
    pool: PgPool,
}

impl EngagementRepository {
    /// Create a new engagement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record an engagement. A missing post surfaces as `NotFound`.
    pub async fn create(
        &self,
        post_id: PostId,
        user_id: UserId,
        liked: bool,
        comment: Option<&str>,
    ) -> AppResult<Engagement> {
        sqlx::query_as::<_, Engagement>(
            "INSERT INTO engagements (post_id, user_id, liked, comment) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(post_id)
        .bind(user_id)
        .bind(liked)
        .bind(comment)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to create engagement", "Engagement already exists"))
    }

    /// Find an engagement by ID.
    pub async fn find_by_id(&self, id: EngagementId) -> AppResult<Option<Engagement>> {
        sqlx::query_as::<_, Engagement>("SELECT * FROM engagements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find engagement"))
    }

    /// Overwrite the like flag and comment.
    pub async fn update(
        &self,
        id: EngagementId,
        liked: bool,
        comment: Option<&str>,
    ) -> AppResult<Option<Engagement>> {
        sqlx::query_as::<_, Engagement>(
            "UPDATE engagements SET liked = $2, comment = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(liked)
        .bind(comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to update engagement"))
    }

    /// Delete an engagement. Returns whether a row was removed.
    pub async fn delete(&self, id: EngagementId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM engagements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db("Failed to delete engagement"))?;
        Ok(result.rows_affected() > 0)
    }

    /// All engagements on a post, oldest first.
    pub async fn list_for_post(&self, post_id: PostId) -> AppResult<Vec<Engagement>> {
        sqlx::query_as::<_, Engagement>(
            "SELECT * FROM engagements WHERE post_id = $1 ORDER BY created_at, id",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list engagements"))
    }

    /// Number of likes on a post.
    pub async fn count_likes(&self, post_id: PostId) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM engagements WHERE post_id = $1 AND liked")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to count likes"))
    }

    /// Number of non-empty comments on a post.
    pub async fn count_comments(&self, post_id: PostId) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM engagements \
             WHERE post_id = $1 AND comment IS NOT NULL AND btrim(comment) <> ''",
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db("Failed to count comments"))
    }
}
