//! # socialhub-entity
//!
//! Domain entity models for SocialHub. Every struct in this crate
//! represents a database table row. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `sqlx::FromRow`.

pub mod analytics;
pub mod company;
pub mod engagement;
pub mod follow;
pub mod notification;
pub mod post;
pub mod role;
pub mod user;

pub use analytics::{EngagementMetrics, PostView};
pub use company::Company;
pub use engagement::Engagement;
pub use follow::Follow;
pub use notification::Notification;
pub use post::Post;
pub use role::Role;
pub use user::User;
