//! Role assignment entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use socialhub_core::types::id::{RoleId, UserId};

/// A named role held by a user (e.g. "admin", "editor").
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Role {
    pub id: RoleId,
    /// Holder of the role; also the owner allowed to edit it.
    pub user_id: UserId,
    pub role_type: String,
    pub created_at: DateTime<Utc>,
}
