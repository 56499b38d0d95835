//! Notifications sent between users.

pub mod rules;
pub mod service;

pub use service::NotificationService;
