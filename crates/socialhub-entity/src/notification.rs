//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use socialhub_core::types::id::{NotificationId, UserId};

/// A notification delivered to a user.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// The user whose action produced the notification, if any.
    pub actor_id: Option<UserId>,
    /// Notification body text.
    pub message: String,
    /// Whether the recipient has read this notification.
    pub is_read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}
