//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Minimum accepted length of the HMAC signing secret, in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Upper bound for `access_ttl_minutes` (one day).
pub const MAX_ACCESS_TTL_MINUTES: u64 = 24 * 60;

/// Upper bound for `refresh_ttl_hours` (one year).
pub const MAX_REFRESH_TTL_HOURS: u64 = 365 * 24;

/// Authentication and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). No default; must be
    /// supplied by a config file or `SOCIALHUB__AUTH__JWT_SECRET`.
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_hours: u64,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_argon2_memory")]
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
    /// Set the `Secure` attribute on auth cookies.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Cookie `Domain` attribute. `None` keeps cookies host-only.
    #[serde(default)]
    pub cookie_domain: Option<String>,
    /// Echo issued tokens in the login response body in addition to cookies.
    #[serde(default = "default_true")]
    pub return_tokens_in_body: bool,
}

impl AuthConfig {
    /// Access token lifetime in seconds.
    pub fn access_ttl_seconds(&self) -> i64 {
        i64::try_from(self.access_ttl_minutes.saturating_mul(60)).unwrap_or(i64::MAX)
    }

    /// Refresh token lifetime in seconds.
    pub fn refresh_ttl_seconds(&self) -> i64 {
        i64::try_from(self.refresh_ttl_hours.saturating_mul(3600)).unwrap_or(i64::MAX)
    }

    pub(crate) fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.len() < MIN_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }
        if self.access_ttl_minutes == 0 || self.refresh_ttl_hours == 0 {
            return Err(AppError::configuration("auth token TTLs must be positive"));
        }
        if self.access_ttl_minutes > MAX_ACCESS_TTL_MINUTES {
            return Err(AppError::configuration(format!(
                "auth.access_ttl_minutes must be at most {MAX_ACCESS_TTL_MINUTES}"
            )));
        }
        if self.refresh_ttl_hours > MAX_REFRESH_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "auth.refresh_ttl_hours must be at most {MAX_REFRESH_TTL_HOURS}"
            )));
        }
        if self.refresh_ttl_seconds() <= self.access_ttl_seconds() {
            return Err(AppError::configuration(
                "auth.refresh_ttl_hours must outlive the access token",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .field("argon2_memory_kib", &self.argon2_memory_kib)
            .field("argon2_iterations", &self.argon2_iterations)
            .field("argon2_parallelism", &self.argon2_parallelism)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_domain", &self.cookie_domain)
            .field("return_tokens_in_body", &self.return_tokens_in_body)
            .finish()
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7 * 24
}

fn default_argon2_memory() -> u32 {
    19 * 1024
}

fn default_argon2_iterations() -> u32 {
    2
}

fn default_argon2_parallelism() -> u32 {
    1
}

fn default_true() -> bool {
    true
}
