//! Follow graph repository implementation.

use sqlx::PgPool;

use socialhub_core::result::AppResult;
use socialhub_core::types::id::UserId;
use socialhub_entity::follow::Follow;

use crate::error::{classify, db};

/// Repository for follow edges.
#[derive(Debug, Clone)]
pub struct FollowRepository {
    pool: PgPool,
}

impl FollowRepository {
    /// Create a new follow repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a follow edge. A duplicate edge yields `Conflict`.
    pub async fn create(&self, follower_id: UserId, following_id: UserId) -> AppResult<Follow> {
        sqlx::query_as::<_, Follow>(
            "INSERT INTO follows (follower_id, following_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(follower_id)
        .bind(following_id)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to follow user", "Already following this user"))
    }

    /// Remove a follow edge. Returns whether one existed.
    pub async fn delete(&self, follower_id: UserId, following_id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
            .bind(follower_id)
            .bind(following_id)
            .execute(&self.pool)
            .await
            .map_err(db("Failed to unfollow user"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Edges pointing at `user_id`.
    pub async fn followers(&self, user_id: UserId) -> AppResult<Vec<Follow>> {
        sqlx::query_as::<_, Follow>(
            "SELECT * FROM follows WHERE following_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list followers"))
    }

    /// Edges leaving `user_id`.
    pub async fn followings(&self, user_id: UserId) -> AppResult<Vec<Follow>> {
        sqlx::query_as::<_, Follow>(
            "SELECT * FROM follows WHERE follower_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list followings"))
    }
}
