//! Post entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use socialhub_core::types::id::{PostId, UserId};

/// A user-authored post.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// Author of the post.
    pub user_id: UserId,
    /// Post body.
    pub content: String,
    /// Optional publication time chosen by the author.
    pub schedule_time: Option<DateTime<Utc>>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post content last changed.
    pub updated_at: DateTime<Utc>,
}
