//! Core types for Serstation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Session {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Two-state session machine derived from `AppState::session`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Anonymous => write!(f, "anonymous"),
            SessionState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// A feed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: u32,
    pub comment_count: u32,
    pub share_count: u32,
    /// Foreign key into the group set. Not checked against existing groups.
    pub group_id: String,
    #[serde(default)]
    pub liked_by_current_user: bool,
}

impl Post {
    /// Build a fresh post from a draft. Counters start at zero.
    pub fn from_draft(id: String, draft: PostDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author: draft.author,
            content: draft.content,
            created_at,
            like_count: 0,
            comment_count: 0,
            share_count: 0,
            group_id: draft.group_id,
            liked_by_current_user: false,
        }
    }

    /// Flip the like flag, moving the counter by one. The counter
    /// saturates at both ends.
    pub fn toggle_like(&mut self) {
        if self.liked_by_current_user {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count = self.like_count.saturating_add(1);
        }
        self.liked_by_current_user = !self.liked_by_current_user;
    }
}

/// The user-supplied part of a new post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    #[serde(alias = "username")]
    pub author: String,
    pub content: String,
    pub group_id: String,
}

impl PostDraft {
    pub fn new(
        author: impl Into<String>,
        content: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            group_id: group_id.into(),
        }
    }
}

/// A named category used to filter posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Group {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            icon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_post(like_count: u32, liked: bool) -> Post {
        Post {
            id: "1".to_string(),
            author: "CarEnthusiast".to_string(),
            content: "Track day".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            like_count,
            comment_count: 8,
            share_count: 3,
            group_id: "tuning".to_string(),
            liked_by_current_user: liked,
        }
    }

    #[test]
    fn test_toggle_like_increments_when_unliked() {
        let mut post = sample_post(24, false);
        post.toggle_like();
        assert!(post.liked_by_current_user);
        assert_eq!(post.like_count, 25);
    }

    #[test]
    fn test_toggle_like_decrements_when_liked() {
        let mut post = sample_post(24, true);
        post.toggle_like();
        assert!(!post.liked_by_current_user);
        assert_eq!(post.like_count, 23);
    }

    #[test]
    fn test_toggle_like_never_wraps_below_zero() {
        let mut post = sample_post(0, true);
        post.toggle_like();
        assert_eq!(post.like_count, 0);
        assert!(!post.liked_by_current_user);
    }

    #[test]
    fn test_toggle_like_saturates_at_max() {
        let mut post = sample_post(u32::MAX, false);
        post.toggle_like();
        assert!(post.liked_by_current_user);
        assert_eq!(post.like_count, u32::MAX);

        post.toggle_like();
        assert!(!post.liked_by_current_user);
        assert_eq!(post.like_count, u32::MAX - 1);
    }

    #[test]
    fn test_from_draft_zeroes_counters() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let post = Post::from_draft("9".to_string(), PostDraft::new("X", "hi", "tuning"), at);

        assert_eq!(post.id, "9");
        assert_eq!(post.author, "X");
        assert_eq!(post.created_at, at);
        assert_eq!(
            (post.like_count, post.comment_count, post.share_count),
            (0, 0, 0)
        );
        assert!(!post.liked_by_current_user);
    }

    #[test]
    fn test_draft_accepts_username_alias() {
        let draft: PostDraft = serde_json::from_str(
            r#"{"username": "X", "content": "hi", "groupId": "tuning"}"#,
        )
        .unwrap();
        assert_eq!(draft, PostDraft::new("X", "hi", "tuning"));
    }

    #[test]
    fn test_session_builder() {
        let session = Session::new("1", "CarLover2024").with_avatar("🚗");
        assert_eq!(session.username, "CarLover2024");
        assert_eq!(session.avatar.as_deref(), Some("🚗"));
    }

    #[test]
    fn test_session_state_display() {
        assert_eq!(SessionState::Anonymous.to_string(), "anonymous");
        assert_eq!(SessionState::Authenticated.to_string(), "authenticated");
    }
}
