//! Role assignments.

pub mod service;

pub use service::RoleService;
