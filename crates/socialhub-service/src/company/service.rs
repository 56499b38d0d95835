//! Company management and membership.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use socialhub_auth::ownership::ensure_owner;
use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_core::types::id::CompanyId;
use socialhub_database::repositories::{CompanyRepository, UserRepository};
use socialhub_entity::company::Company;
use socialhub_entity::user::User;

use crate::context::RequestContext;

/// A company together with its members.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetails {
    #[serde(flatten)]
    pub company: Company,
    /// Users whose `company_id` points at this company.
    pub teams: Vec<User>,
}

/// Creates companies and manages who belongs to them.
#[derive(Debug, Clone)]
pub struct CompanyService {
    company_repo: Arc<CompanyRepository>,
    user_repo: Arc<UserRepository>,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(company_repo: Arc<CompanyRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            company_repo,
            user_repo,
        }
    }

    /// Creates a company owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: &str,
        description: &str,
    ) -> AppResult<Company> {
        let company = self
            .company_repo
            .create(ctx.user_id, name, description)
            .await?;
        info!(company_id = %company.id, owner = %ctx.user_id, "Company created");
        Ok(company)
    }

    /// Fetches a company and its team.
    pub async fn get(&self, id: CompanyId) -> AppResult<CompanyDetails> {
        let company = self.find(id).await?;
        let teams = self.user_repo.find_by_company(id).await?;
        Ok(CompanyDetails { company, teams })
    }

    /// Renames or re-describes a company the caller owns.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: CompanyId,
        name: &str,
        description: &str,
    ) -> AppResult<Company> {
        let company = self.find(id).await?;
        ensure_owner(ctx.user_id, &company, "update this company")?;

        self.company_repo
            .update(id, name, description)
            .await?
            .ok_or_else(|| AppError::not_found("Company not found"))
    }

    /// Deletes a company the caller owns; members are detached.
    pub async fn delete(&self, ctx: &RequestContext, id: CompanyId) -> AppResult<()> {
        let company = self.find(id).await?;
        ensure_owner(ctx.user_id, &company, "delete this company")?;

        if !self.company_repo.delete(id).await? {
            return Err(AppError::not_found("Company not found"));
        }
        info!(company_id = %id, "Company deleted");
        Ok(())
    }

    /// Moves the caller into a company, leaving any previous one.
    pub async fn join(&self, ctx: &RequestContext, id: CompanyId) -> AppResult<CompanyDetails> {
        self.find(id).await?;
        if !self.user_repo.set_company(ctx.user_id, Some(id)).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(company_id = %id, user_id = %ctx.user_id, "User joined company");
        self.get(id).await
    }

    /// Removes the caller from their current company.
    pub async fn leave(&self, ctx: &RequestContext) -> AppResult<()> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        if user.company_id.is_none() {
            return Err(AppError::validation("You are not a member of any company"));
        }
        self.user_repo.set_company(ctx.user_id, None).await?;
        info!(user_id = %ctx.user_id, "User left company");
        Ok(())
    }

    async fn find(&self, id: CompanyId) -> AppResult<Company> {
        self.company_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Company not found"))
    }
}
