//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use socialhub_core::types::id::UserId;

/// Context for the current authenticated request.
///
/// Built by the authentication middleware from validated token claims and
/// passed into service methods so every operation knows who is acting.
/// Lives only as long as the request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// `jti` of the access token that authenticated the request, if it had one.
    pub token_id: Option<Uuid>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, token_id: Option<Uuid>, user_agent: Option<String>) -> Self {
        Self {
            user_id,
            token_id,
            user_agent,
            request_time: Utc::now(),
        }
    }
}
