//! Keyword search.

use std::sync::Arc;

use socialhub_core::error::AppError;
use socialhub_core::result::AppResult;
use socialhub_database::repositories::{PostRepository, UserRepository};
use socialhub_entity::post::Post;
use socialhub_entity::user::User;

/// Upper bound on results returned by a single search.
const MAX_RESULTS: i64 = 50;

/// Substring search over post content and usernames.
#[derive(Debug, Clone)]
pub struct SearchService {
    post_repo: Arc<PostRepository>,
    user_repo: Arc<UserRepository>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(post_repo: Arc<PostRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            post_repo,
            user_repo,
        }
    }

    /// Posts whose content contains `keyword`.
    pub async fn search_posts(&self, keyword: &str) -> AppResult<Vec<Post>> {
        let keyword = normalize_keyword(keyword)?;
        self.post_repo.search(keyword, MAX_RESULTS).await
    }

    /// Users whose username contains `keyword`.
    pub async fn search_users(&self, keyword: &str) -> AppResult<Vec<User>> {
        let keyword = normalize_keyword(keyword)?;
        self.user_repo.search(keyword, MAX_RESULTS).await
    }
}

fn normalize_keyword(keyword: &str) -> AppResult<&str> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(AppError::validation("keyword is required"));
    }
    Ok(keyword)
}
