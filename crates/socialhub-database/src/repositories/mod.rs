//! Concrete repository implementations, one per table.

pub mod analytics;
pub mod company;
pub mod engagement;
pub mod follow;
pub mod notification;
pub mod post;
pub mod role;
pub mod user;

pub use analytics::AnalyticsRepository;
pub use company::CompanyRepository;
pub use engagement::EngagementRepository;
pub use follow::FollowRepository;
pub use notification::NotificationRepository;
pub use post::PostRepository;
pub use role::RoleRepository;
pub use user::UserRepository;

/// Build a `LIKE` pattern matching `keyword` anywhere, escaping wildcards.
pub(crate) fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
