//! Notification repository implementation.

use sqlx::PgPool;

use socialhub_core::result::AppResult;
use socialhub_core::types::id::{NotificationId, UserId};
use socialhub_core::types::pagination::{PageRequest, PageResponse};
use socialhub_entity::notification::Notification;

use crate::error::{classify, db};

/// Repository for notification CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List notifications for a user, newest first.
    pub async fn find_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to count notifications"))?;

        let notifs = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to list notifications"))?;

        Ok(PageResponse::new(notifs, page, total as u64))
    }

    /// Find a notification by ID.
    pub async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find notification"))
    }

    /// Create a notification. A missing recipient surfaces as `NotFound`.
    pub async fn create(
        &self,
        user_id: UserId,
        actor_id: Option<UserId>,
        message: &str,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, actor_id, message) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(actor_id)
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to create notification", "Notification already exists"))
    }

    /// Mark a notification as read. Already-read notifications keep their
    /// original `read_at`.
    pub async fn mark_read(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET is_read = TRUE, read_at = COALESCE(read_at, NOW()) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db("Failed to mark notification read"))
    }
}
