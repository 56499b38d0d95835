//! Request DTOs with validation.
//!
//! Field names follow the camelCase wire format of existing clients;
//! snake_case spellings are accepted as aliases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use socialhub_core::types::id::{PostId, UserId};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 128, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Optional body for `POST /refresh`; the cookie is used when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Create post request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 5000, message = "Content is required"))]
    pub content: String,
    /// Optional publication time.
    #[serde(default, alias = "schedule_time")]
    pub schedule_time: Option<DateTime<Utc>>,
}

/// Edit post request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditPostRequest {
    #[validate(length(min = 1, max = 5000, message = "Content is required"))]
    pub content: String,
}

/// Like and/or comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEngagementRequest {
    #[serde(alias = "post_id")]
    pub post_id: PostId,
    #[serde(default, rename = "like")]
    pub liked: bool,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

/// Replace the like flag and comment of an engagement.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEngagementRequest {
    #[serde(default, rename = "like")]
    pub liked: bool,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

/// Send a notification to another user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    /// Recipient.
    #[serde(alias = "user_id")]
    pub user_id: UserId,
    #[validate(length(min = 1, max = 500, message = "Message is required"))]
    pub message: String,
}

/// Follow a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    #[serde(alias = "following_id")]
    pub following_id: UserId,
}

/// Keyword search request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, max = 100, message = "keyword is required"))]
    pub keyword: String,
}

/// Record a post view.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrackViewRequest {
    #[serde(alias = "post_id")]
    pub post_id: PostId,
}

/// Create or update a company.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
}

/// Create or update a role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleRequest {
    #[serde(rename = "type", alias = "role_type")]
    #[validate(length(min = 1, max = 50, message = "Role type is required"))]
    pub role_type: String,
}
