//! Follow graph edge.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use socialhub_core::types::id::{FollowId, UserId};

/// `follower_id` follows `following_id`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Follow {
    pub id: FollowId,
    pub follower_id: UserId,
    pub following_id: UserId,
    pub created_at: DateTime<Utc>,
}
