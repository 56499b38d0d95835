//! File uploads to the local upload directory.

pub mod service;

pub use service::{UploadService, UploadedFile};
