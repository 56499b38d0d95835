//! Role assignment CRUD.

use std::sync::Arc;

use tracing::info;

use socialhub_auth::ownership::ensure_owner;
use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_core::types::id::RoleId;
use socialhub_database::repositories::RoleRepository;
use socialhub_entity::role::Role;

use crate::context::RequestContext;

/// Manages the roles users hold.
#[derive(Debug, Clone)]
pub struct RoleService {
    role_repo: Arc<RoleRepository>,
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(role_repo: Arc<RoleRepository>) -> Self {
        Self { role_repo }
    }

    /// Grants the caller a role.
    pub async fn create(&self, ctx: &RequestContext, role_type: &str) -> AppResult<Role> {
        let role = self.role_repo.create(ctx.user_id, role_type).await?;
        info!(role_id = %role.id, user_id = %ctx.user_id, role_type, "Role created");
        Ok(role)
    }

    /// All role assignments.
    pub async fn list(&self) -> AppResult<Vec<Role>> {
        self.role_repo.list().await
    }

    /// Fetches a role or fails with `NotFound`.
    pub async fn get(&self, id: RoleId) -> AppResult<Role> {
        self.role_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Role not found"))
    }

    /// Changes the type of a role the caller holds. The holder itself
    /// cannot be reassigned.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: RoleId,
        role_type: &str,
    ) -> AppResult<Role> {
        let role = self.get(id).await?;
        ensure_owner(ctx.user_id, &role, "edit this role")?;

        self.role_repo
            .update_type(id, role_type)
            .await?
            .ok_or_else(|| AppError::not_found("Role not found"))
    }

    /// Deletes a role the caller holds.
    pub async fn delete(&self, ctx: &RequestContext, id: RoleId) -> AppResult<()> {
        let role = self.get(id).await?;
        ensure_owner(ctx.user_id, &role, "delete this role")?;

        if !self.role_repo.delete(id).await? {
            return Err(AppError::not_found("Role not found"));
        }
        info!(role_id = %id, "Role deleted");
        Ok(())
    }
}
