//! Follow graph.

pub mod service;

pub use service::FollowService;
