//! Canonical username form.
//!
//! Usernames are case-insensitive: `Ernie` and `ERNie` are the same user. Every
//! name entering a [`FollowsGraph`](super::FollowsGraph) goes through
//! [`normalize`] first, so comparisons elsewhere are plain string equality.

/// Returns the canonical (lowercase) form of a username.
pub fn normalize(username: &str) -> String {
    username.to_lowercase()
}
