//! User repository implementation.

use sqlx::PgPool;

use socialhub_core::result::AppResult;
use socialhub_core::types::id::{CompanyId, UserId};
use socialhub_entity::user::User;

use super::contains_pattern;
use crate::error::{classify, db};

/// Repository for user account operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account. A taken username yields `Conflict`.
    pub async fn create(&self, username: &str, password_hash: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(classify("Failed to create user", "Username already taken"))
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find user"))
    }

    /// Find a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db("Failed to find user by username"))
    }

    /// Check whether a user exists.
    pub async fn exists(&self, id: UserId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db("Failed to check user existence"))
    }

    /// Users whose username contains `keyword`.
    pub async fn search(&self, keyword: &str, limit: i64) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE username LIKE $1 ESCAPE '\\' ORDER BY username LIMIT $2",
        )
        .bind(contains_pattern(keyword))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db("Failed to search users"))
    }

    /// Members of a company.
    pub async fn find_by_company(&self, company_id: CompanyId) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE company_id = $1 ORDER BY username")
            .bind(company_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db("Failed to list company members"))
    }

    /// Set or clear the company a user belongs to.
    pub async fn set_company(&self, id: UserId, company_id: Option<CompanyId>) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET company_id = $2 WHERE id = $1")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(classify("Failed to update user company", "Company membership conflict"))?;
        Ok(result.rows_affected() > 0)
    }
}
