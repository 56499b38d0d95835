//! # socialhub-storage
//!
//! Storage provider implementations for SocialHub uploads.

pub mod providers;

pub use providers::LocalStorageProvider;
