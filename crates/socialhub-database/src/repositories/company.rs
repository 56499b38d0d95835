//! Company repository implementation.

use sqlx::PgPool;

use socialhub_core::result::AppResult;
use socialhub_core::types::id::{CompanyId, UserId};
use socialhub_entity::company::Company;

use crate::error::{classify, db};

/// Repository for companies.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Create a new company repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a company owned by `owner_id`.
    pub async fn create(
        &self,
        owner_id: UserId,
        name: &str,
        description: &str,
    ) -> AppResult<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (owner_id, name, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(owner_id)
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to create company", "Company name already taken"))
    }

    /// Find a company by ID.
    pub async fn find_by_id(&self, id: CompanyId) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find company"))
    }

    /// Update name and description.
    pub async fn update(
        &self,
        id: CompanyId,
        name: &str,
        description: &str,
    ) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $2, description = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(classify("Failed to update company", "Company name already taken"))
    }

    /// Delete a company. Members are detached by the `ON DELETE SET NULL` key.
    pub async fn delete(&self, id: CompanyId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db("Failed to delete company"))?;
        Ok(result.rows_affected() > 0)
    }
}
