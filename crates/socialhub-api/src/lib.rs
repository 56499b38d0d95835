//! # socialhub-api
//!
//! HTTP API layer for SocialHub built on Axum.
//!
//! Provides the REST endpoints, the cookie-based session gate, request
//! logging and CORS middleware, extractors, DTOs, and error mapping.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
