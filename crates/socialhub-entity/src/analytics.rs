//! Post analytics entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use socialhub_core::types::id::{MetricsId, PostId, PostViewId, UserId};

/// A single recorded view of a post.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostView {
    pub id: PostViewId,
    pub post_id: PostId,
    /// The viewer.
    pub user_id: UserId,
    pub viewed_at: DateTime<Utc>,
}

/// A persisted snapshot of a post's engagement counters.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EngagementMetrics {
    /// Unique snapshot identifier.
    pub id: MetricsId,
    /// The post the counters belong to.
    pub post_id: PostId,
    /// The user who requested the snapshot.
    pub user_id: UserId,
    /// Number of engagements with `liked = true`.
    pub likes: i64,
    /// Number of engagements with a non-empty comment.
    pub comments: i64,
    /// Number of recorded views.
    pub views: i64,
    /// When the snapshot was computed.
    pub computed_at: DateTime<Utc>,
}
