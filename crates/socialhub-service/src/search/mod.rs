//! Keyword search over posts and users.

pub mod service;

pub use service::SearchService;
