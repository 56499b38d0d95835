//! Role repository implementation.

use sqlx::PgPool;

use socialhub_core::result::AppResult;
use socialhub_core::types::id::{RoleId, UserId};
use socialhub_entity::role::Role;

use crate::error::{classify, db};

/// Repository for role assignments.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Assign a role to a user.
    pub async fn create(&self, user_id: UserId, role_type: &str) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "INSERT INTO roles (user_id, role_type) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(role_type)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to create role", "User already holds this role"))
    }

    /// Find a role by ID.
    pub async fn find_by_id(&self, id: RoleId) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find role"))
    }

    /// All roles.
    pub async fn list(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db("Failed to list roles"))
    }

    /// Change a role's type.
    pub async fn update_type(&self, id: RoleId, role_type: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("UPDATE roles SET role_type = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(role_type)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify("Failed to update role", "User already holds this role"))
    }

    /// Delete a role. Returns whether a row was removed.
    pub async fn delete(&self, id: RoleId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db("Failed to delete role"))?;
        Ok(result.rows_affected() > 0)
    }
}
