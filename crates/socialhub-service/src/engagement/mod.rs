//! Likes and comments.

pub mod service;

pub use service::EngagementService;
