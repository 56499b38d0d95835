//! # socialhub-auth
//!
//! Session authentication for SocialHub.
//!
//! ## Modules
//!
//! - `jwt`: access/refresh token issuance, validation, and typed claims
//! - `password`: Argon2id password hashing and verification
//! - `ownership`: the single "does this caller own this resource" check

pub mod jwt;
pub mod ownership;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError, TokenPair, TokenType};
pub use ownership::{Owned, ensure_owner, owns};
pub use password::PasswordHasher;
