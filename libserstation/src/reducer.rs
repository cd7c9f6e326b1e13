//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(State, Action, now) -> State`.
//! It performs no I/O and reads no clock; the timestamp for new posts is
//! passed in by the store.

use chrono::{DateTime, Utc};

use crate::actions::Action;
use crate::state::AppState;
use crate::types::Post;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// Deterministic: same inputs always produce the same output.
pub fn reduce(state: AppState, action: Action, now: DateTime<Utc>) -> AppState {
    match action {
        Action::SetSession(session) => AppState { session, ..state },

        Action::SetSelectedGroup(selected_group_id) => AppState {
            selected_group_id,
            ..state
        },

        Action::AddPost(draft) => {
            let (id, next_post_seq) = next_post_id(&state);
            let mut posts = Vec::with_capacity(state.posts.len() + 1);
            posts.push(Post::from_draft(id, draft, now));
            posts.extend(state.posts);

            AppState {
                posts,
                create_post_panel_open: false,
                next_post_seq,
                ..state
            }
        }

        Action::ToggleLike { post_id } => {
            let mut state = state;
            if let Some(post) = state.posts.iter_mut().find(|p| p.id == post_id) {
                post.toggle_like();
            }
            state
        }

        Action::SetCreatePostPanelOpen(open) => AppState {
            create_post_panel_open: open,
            ..state
        },

        Action::Logout => AppState {
            session: None,
            ..state
        },
    }
}

/// Whether `reduce(state, action, _)` would differ from `state`.
///
/// Answers from the fields the action touches, without building the next
/// state.
pub fn changes(state: &AppState, action: &Action) -> bool {
    match action {
        Action::SetSession(session) => state.session != *session,
        Action::SetSelectedGroup(group_id) => state.selected_group_id != *group_id,
        Action::AddPost(_) => true,
        // The liked flag always flips
        Action::ToggleLike { post_id } => state.post(post_id).is_some(),
        Action::SetCreatePostPanelOpen(open) => state.create_post_panel_open != *open,
        Action::Logout => state.session.is_some(),
    }
}

/// Pick the next unused numeric id and the counter value that follows it.
fn next_post_id(state: &AppState) -> (String, u64) {
    let mut seq = state.next_post_seq;
    loop {
        let candidate = seq.to_string();
        seq = seq.checked_add(1).unwrap_or(1);
        if state.post(&candidate).is_none() {
            return (candidate, seq);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Group, PostDraft, Session};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn state_with_posts(ids: &[&str]) -> AppState {
        let posts = ids
            .iter()
            .map(|id| Post::from_draft(id.to_string(), PostDraft::new("a", "b", "tuning"), now()))
            .collect();
        AppState::new(vec![Group::new("tuning", "Tuning")], posts)
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = state_with_posts(&["1"]);
        let before = state.clone();

        let new_state = reduce(state.clone(), Action::SetCreatePostPanelOpen(true), now());

        assert_eq!(state, before);
        assert!(new_state.create_post_panel_open);
    }

    #[test]
    fn test_set_session_and_logout() {
        let state = state_with_posts(&[]);
        let state = reduce(state, Action::SetSession(Some(Session::new("1", "u"))), now());
        assert!(state.is_authenticated());

        let state = reduce(state, Action::Logout, now());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_changes_matches_reduce() {
        let mut state = state_with_posts(&["1"]);
        state.session = Some(Session::new("1", "CarLover2024"));

        let actions = [
            Action::SetSession(state.session.clone()),
            Action::SetSession(None),
            Action::SetSelectedGroup(None),
            Action::SetSelectedGroup(Some("tuning".to_string())),
            Action::AddPost(PostDraft::new("X", "hi", "tuning")),
            Action::toggle_like("1"),
            Action::toggle_like("404"),
            Action::SetCreatePostPanelOpen(false),
            Action::SetCreatePostPanelOpen(true),
            Action::Logout,
        ];

        for action in actions {
            let predicted = changes(&state, &action);
            let next = reduce(state.clone(), action.clone(), now());
            assert_eq!(predicted, next != state, "{:?}", action);
        }
    }

    #[test]
    fn test_add_post_uses_supplied_timestamp() {
        let state = state_with_posts(&["1"]);
        let state = reduce(state, Action::AddPost(PostDraft::new("X", "hi", "tuning")), now());

        assert_eq!(state.posts[0].created_at, now());
        assert_eq!(state.posts[0].id, "2");
    }

    #[test]
    fn test_add_post_at_counter_limit_wraps() {
        let mut state = state_with_posts(&["1"]);
        state.next_post_seq = u64::MAX;

        let state = reduce(state, Action::AddPost(PostDraft::new("X", "a", "tuning")), now());
        assert_eq!(state.posts[0].id, u64::MAX.to_string());
        assert_eq!(state.next_post_seq, 1);

        let state = reduce(state, Action::AddPost(PostDraft::new("X", "b", "tuning")), now());
        assert_eq!(state.posts[0].id, "2");
        assert_eq!(state.next_post_seq, 3);
    }

    #[test]
    fn test_add_post_skips_ids_already_taken() {
        let mut state = state_with_posts(&["1", "2", "3"]);
        state.next_post_seq = 2;

        let state = reduce(state, Action::AddPost(PostDraft::new("X", "hi", "tuning")), now());

        assert_eq!(state.posts[0].id, "4");
        assert_eq!(state.next_post_seq, 5);
    }

    #[test]
    fn test_add_post_keeps_dangling_group() {
        let state = state_with_posts(&[]);
        let state = reduce(state, Action::AddPost(PostDraft::new("X", "", "no-such-group")), now());

        assert_eq!(state.posts[0].group_id, "no-such-group");
        assert_eq!(state.posts[0].content, "");
    }

    #[test]
    fn test_toggle_like_missing_post_is_noop() {
        let state = state_with_posts(&["1", "2"]);
        let new_state = reduce(state.clone(), Action::toggle_like("99"), now());
        assert_eq!(new_state, state);
    }

    #[test]
    fn test_selected_group_not_validated() {
        let state = state_with_posts(&[]);
        let state = reduce(state, Action::SetSelectedGroup(Some("ghost".to_string())), now());
        assert_eq!(state.selected_group_id.as_deref(), Some("ghost"));
    }
}
