//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! every action the store accepts, plus the JSON wire form used by
//! `Store::dispatch_json`.

use serde::{Deserialize, Serialize};

use crate::types::{PostDraft, Session};

/// Actions that trigger state transitions
///
/// Actions are plain data describing what should happen. The reducer
/// (see `reducer.rs`) is responsible for applying them to state.
///
/// The serialized form is `{"type": TAG, "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    /// Replace the session. `None` signs the user out.
    #[serde(rename = "SET_USER", alias = "SET_SESSION")]
    SetSession(Option<Session>),

    /// Replace the group filter. `None` shows every group.
    #[serde(rename = "SET_SELECTED_GROUP")]
    SetSelectedGroup(Option<String>),

    /// Prepend a new post built from the draft and close the create-post panel
    #[serde(rename = "ADD_POST")]
    AddPost(PostDraft),

    /// Flip the like flag on a post
    #[serde(rename = "TOGGLE_LIKE")]
    ToggleLike {
        #[serde(rename = "postId")]
        post_id: String,
    },

    /// Open or close the create-post panel
    #[serde(rename = "SET_CREATE_POST_OPEN")]
    SetCreatePostPanelOpen(bool),

    /// Clear the session
    #[serde(rename = "LOGOUT")]
    Logout,
}

impl Action {
    /// Every tag accepted on the wire, aliases included.
    pub const TAGS: &'static [&'static str] = &[
        "SET_USER",
        "SET_SESSION",
        "SET_SELECTED_GROUP",
        "ADD_POST",
        "TOGGLE_LIKE",
        "SET_CREATE_POST_OPEN",
        "LOGOUT",
    ];

    /// Canonical wire tag of this action
    pub fn tag(&self) -> &'static str {
        match self {
            Action::SetSession(_) => "SET_USER",
            Action::SetSelectedGroup(_) => "SET_SELECTED_GROUP",
            Action::AddPost(_) => "ADD_POST",
            Action::ToggleLike { .. } => "TOGGLE_LIKE",
            Action::SetCreatePostPanelOpen(_) => "SET_CREATE_POST_OPEN",
            Action::Logout => "LOGOUT",
        }
    }

    pub fn is_known_tag(tag: &str) -> bool {
        Self::TAGS.contains(&tag)
    }

    pub fn toggle_like(post_id: impl Into<String>) -> Self {
        Action::ToggleLike {
            post_id: post_id.into(),
        }
    }
}

/// Just enough of an incoming action to read its tag
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
}
