//! Notification delivery and read tracking.

use std::sync::Arc;

use tracing::{info, warn};

use socialhub_auth::ownership::ensure_owner;
use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_core::types::id::{NotificationId, UserId};
use socialhub_core::types::pagination::{PageRequest, PageResponse};
use socialhub_database::repositories::{NotificationRepository, UserRepository};
use socialhub_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
    /// User repository, for recipient checks.
    user_repo: Arc<UserRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            notif_repo,
            user_repo,
        }
    }

    /// Sends a notification from the caller to `recipient`.
    pub async fn send(
        &self,
        ctx: &RequestContext,
        recipient: UserId,
        message: &str,
    ) -> AppResult<Notification> {
        if !self.user_repo.exists(recipient).await? {
            return Err(AppError::not_found("User not found"));
        }
        let notification = self
            .notif_repo
            .create(recipient, Some(ctx.user_id), message)
            .await?;
        info!(notification_id = %notification.id, recipient = %recipient, "Notification sent");
        Ok(notification)
    }

    /// Best-effort notification raised as a side effect of another action.
    ///
    /// Failures are logged and swallowed so the triggering action succeeds.
    pub async fn notify(&self, actor: UserId, recipient: UserId, message: &str) {
        if actor == recipient {
            return;
        }
        if let Err(e) = self.notif_repo.create(recipient, Some(actor), message).await {
            warn!(error = %e, recipient = %recipient, "Failed to deliver notification");
        }
    }

    /// Lists the caller's notifications, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        self.notif_repo.find_by_user(ctx.user_id, page).await
    }

    /// Marks one of the caller's notifications as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        id: NotificationId,
    ) -> AppResult<Notification> {
        let notification = self
            .notif_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))?;
        ensure_owner(ctx.user_id, &notification, "mark this notification as read")?;

        self.notif_repo
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))
    }
}
