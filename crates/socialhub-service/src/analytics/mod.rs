//! Post view tracking and engagement metrics.

pub mod service;

pub use service::AnalyticsService;
