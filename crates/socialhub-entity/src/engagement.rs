//! Engagement (like / comment) entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use socialhub_core::types::id::{EngagementId, PostId, UserId};

/// A like and/or comment left by a user on a post.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Engagement {
    /// Unique engagement identifier.
    pub id: EngagementId,
    /// The post engaged with.
    pub post_id: PostId,
    /// The engaging user.
    pub user_id: UserId,
    /// Whether the user likes the post.
    pub liked: bool,
    /// Optional comment text.
    pub comment: Option<String>,
    /// When the engagement was created.
    pub created_at: DateTime<Utc>,
    /// When the engagement was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Engagement {
    /// Whether this engagement carries a non-empty comment.
    pub fn has_comment(&self) -> bool {
        self.comment
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    }
}
