//! Route handlers organized by domain.

pub mod analytics;
pub mod auth;
pub mod company;
pub mod engagement;
pub mod follow;
pub mod health;
pub mod notification;
pub mod post;
pub mod role;
pub mod search;
pub mod upload;
