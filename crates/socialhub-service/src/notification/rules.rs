//! Wording of automatic notifications.

/// Text sent to a user who gained a follower.
pub fn follow_message(follower: &str) -> String {
    format!("{follower} started following you")
}

/// Text sent to a post's author when someone engages with it.
///
/// Returns `None` when the engagement carries neither a like nor a comment.
pub fn engagement_message(actor: &str, liked: bool, commented: bool) -> Option<String> {
    match (liked, commented) {
        (true, true) => Some(format!("{actor} liked and commented on your post")),
        (true, false) => Some(format!("{actor} liked your post")),
        (false, true) => Some(format!("{actor} commented on your post")),
        (false, false) => None,
    }
}
