//! User account entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use socialhub_core::types::id::{CompanyId, UserId};

/// A registered account.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Argon2 PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Company the user belongs to, if any.
    pub company_id: Option<CompanyId>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
