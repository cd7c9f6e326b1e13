//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! Derived values such as `is_authenticated` are computed on read and are
//! never stored alongside the data they come from.

use serde::{Deserialize, Serialize};

use crate::types::{Group, Post, Session, SessionState};

/// Root application state
///
/// This is the single source of truth for the feed. Views read it through
/// the store and never mutate it directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Signed-in identity, if any
    pub session: Option<Session>,

    /// Group filter for the feed
    pub selected_group_id: Option<String>,

    /// Newest first
    pub posts: Vec<Post>,

    /// Seeded once, never changed afterwards
    pub groups: Vec<Group>,

    /// Create-post panel visible?
    pub create_post_panel_open: bool,

    /// Next candidate for a synthesized post id
    pub(crate) next_post_seq: u64,
}

impl AppState {
    /// Build a state from seed data with nobody signed in and no filter.
    pub fn new(groups: Vec<Group>, posts: Vec<Post>) -> Self {
        let next_post_seq = posts
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .and_then(|max| max.checked_add(1))
            .unwrap_or(1);

        Self {
            session: None,
            selected_group_id: None,
            posts,
            groups,
            create_post_panel_open: false,
            next_post_seq,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session_state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts in the selected group, or all posts when no group is selected.
    pub fn visible_posts(&self) -> Vec<&Post> {
        match self.selected_group_id.as_deref() {
            Some(group_id) => self.posts.iter().filter(|p| p.group_id == group_id).collect(),
            None => self.posts.iter().collect(),
        }
    }

    /// Read-only copy of everything a view may consume.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            session: self.session.clone(),
            is_authenticated: self.is_authenticated(),
            selected_group_id: self.selected_group_id.clone(),
            posts: self.posts.clone(),
            groups: self.groups.clone(),
            create_post_panel_open: self.create_post_panel_open,
        }
    }
}

/// Outbound view of the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub session: Option<Session>,
    pub is_authenticated: bool,
    pub selected_group_id: Option<String>,
    pub posts: Vec<Post>,
    pub groups: Vec<Group>,
    pub create_post_panel_open: bool,
}
