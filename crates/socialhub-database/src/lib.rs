//! # socialhub-database
//!
//! PostgreSQL connection management, embedded migrations, and concrete
//! repository implementations for all SocialHub entities.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
