//! Companies and their member teams.

pub mod service;

pub use service::{CompanyDetails, CompanyService};
