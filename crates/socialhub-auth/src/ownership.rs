//! Resource ownership checks.
//!
//! Every mutating endpoint on an owned resource goes through
//! [`ensure_owner`]; there is no per-handler comparison logic.

use socialhub_core::error::AppError;
use socialhub_core::types::id::UserId;
use socialhub_entity::{Company, Engagement, Notification, Post, Role};

/// A resource with a single owning account.
pub trait Owned {
    /// The account allowed to mutate this resource.
    fn owner_id(&self) -> UserId;
}

impl Owned for Post {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

impl Owned for Engagement {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// The recipient owns a notification.
impl Owned for Notification {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// The holder owns a role.
impl Owned for Role {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

impl Owned for Company {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Whether `identity` owns `resource`.
pub fn owns<R: Owned + ?Sized>(identity: UserId, resource: &R) -> bool {
    resource.owner_id() == identity
}

/// Fail with `403` unless `identity` owns `resource`.
///
/// `action` completes the sentence "Unauthorized to ...".
pub fn ensure_owner<R: Owned + ?Sized>(
    identity: UserId,
    resource: &R,
    action: &str,
) -> Result<(), AppError> {
    if owns(identity, resource) {
        Ok(())
    } else {
        tracing::debug!(
            caller = %identity,
            owner = %resource.owner_id(),
            action,
            "Ownership check failed"
        );
        Err(AppError::authorization(format!("Unauthorized to {action}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use socialhub_core::error::ErrorKind;
    use socialhub_core::types::id::{NotificationId, PostId};

    use super::*;

    fn post(owner: i64) -> Post {
        Post {
            id: PostId(1),
            user_id: UserId(owner),
            content: "hello".into(),
            schedule_time: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_passes() {
        assert!(owns(UserId(3), &post(3)));
        assert!(ensure_owner(UserId(3), &post(3), "edit this post").is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err = ensure_owner(UserId(4), &post(3), "edit this post").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(err.message, "Unauthorized to edit this post");
    }

    #[test]
    fn test_notification_owner_is_recipient() {
        let notification = Notification {
            id: NotificationId(9),
            user_id: UserId(5),
            actor_id: Some(UserId(6)),
            message: "bob followed you".into(),
            is_read: false,
            read_at: None,
            created_at: Utc::now(),
        };
        assert!(owns(UserId(5), &notification));
        assert!(!owns(UserId(6), &notification));
    }
}
