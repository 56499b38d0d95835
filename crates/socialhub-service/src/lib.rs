//! # socialhub-service
//!
//! Business logic service layer for SocialHub. Each service orchestrates
//! repositories, the upload storage provider, and authentication to
//! implement one area of the API.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod analytics;
pub mod auth;
pub mod company;
pub mod context;
pub mod engagement;
pub mod follow;
pub mod notification;
pub mod post;
pub mod role;
pub mod search;
pub mod upload;

pub use analytics::AnalyticsService;
pub use auth::{AuthService, LoginOutcome};
pub use company::{CompanyDetails, CompanyService};
pub use context::RequestContext;
pub use engagement::EngagementService;
pub use follow::FollowService;
pub use notification::NotificationService;
pub use post::PostService;
pub use role::RoleService;
pub use search::SearchService;
pub use upload::{UploadService, UploadedFile};
