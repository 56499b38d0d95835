//! Company entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use socialhub_core::types::id::{CompanyId, UserId};

/// A company that users can join. Its members form the company's team.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Company {
    /// Unique company identifier.
    pub id: CompanyId,
    /// The user who created the company and may modify it.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// When the company was created.
    pub created_at: DateTime<Utc>,
}
