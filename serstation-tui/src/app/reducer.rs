//! Pure view reducer
//!
//! `(UiState, &AppState, Action) -> Update`. The feed state is read-only
//! here; changes to it come back as store actions in `Update::dispatch`
//! for the caller to send through `Store::dispatch`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libserstation::{Action as FeedAction, AppState, PostDraft};

use super::actions::Action;
use super::state::{ToastVariant, UiState};

/// Result of reducing one view action
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub ui: UiState,
    /// Store actions to dispatch, in order
    pub dispatch: Vec<FeedAction>,
}

impl Update {
    fn ui(ui: UiState) -> Self {
        Self {
            ui,
            dispatch: Vec::new(),
        }
    }

    fn with(ui: UiState, action: FeedAction) -> Self {
        Self {
            ui,
            dispatch: vec![action],
        }
    }
}

/// Pure reducer function
///
/// No I/O and no mutation of the feed state.
pub fn reduce(state: UiState, feed: &AppState, action: Action) -> Update {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, feed, key),
        Action::Tick => {
            let tick = state.tick + 1;
            let toasts = state
                .toasts
                .into_iter()
                .filter(|t| t.expires_at > tick)
                .collect();
            Update::ui(UiState {
                tick,
                toasts,
                ..state
            })
        }
        Action::Resize(_, _) => Update::ui(state),

        // === Navigation ===
        Action::Quit => Update::ui(UiState {
            should_quit: true,
            ..state
        }),

        Action::ShowHelp => Update::ui(UiState {
            help_visible: true,
            ..state
        }),

        Action::HideHelp => Update::ui(UiState {
            help_visible: false,
            ..state
        }),

        Action::CursorUp => Update::ui(UiState {
            cursor: state.cursor.saturating_sub(1),
            ..state
        }),

        Action::CursorDown => {
            let last = feed.visible_posts().len().saturating_sub(1);
            Update::ui(UiState {
                cursor: (state.cursor + 1).min(last),
                ..state
            })
        }

        Action::NextGroup => {
            let next = step_group(feed, 1);
            Update::with(UiState { cursor: 0, ..state }, FeedAction::SetSelectedGroup(next))
        }

        Action::PrevGroup => {
            let prev = step_group(feed, -1);
            Update::with(UiState { cursor: 0, ..state }, FeedAction::SetSelectedGroup(prev))
        }

        Action::ShowAllGroups => Update::with(
            UiState { cursor: 0, ..state },
            FeedAction::SetSelectedGroup(None),
        ),

        // === Post interactions ===
        Action::LikeSelected => {
            if !feed.is_authenticated() {
                return login_required(state, "Please log in to like posts.");
            }
            match selected_post_id(&state, feed) {
                Some(post_id) => Update::with(state, FeedAction::ToggleLike { post_id }),
                None => Update::ui(state),
            }
        }

        Action::CommentSelected => with_toast(
            state,
            "Comments",
            "Comments are coming soon!",
            ToastVariant::Default,
        ),

        Action::ShareSelected => with_toast(
            state,
            "Share",
            "Sharing is coming soon!",
            ToastVariant::Default,
        ),

        // === Create-post panel ===
        Action::OpenComposer => {
            if !feed.is_authenticated() {
                return login_required(state, "Please log in to create a post.");
            }
            Update::with(state, FeedAction::SetCreatePostPanelOpen(true))
        }

        Action::CloseComposer => Update::with(state, FeedAction::SetCreatePostPanelOpen(false)),

        Action::SubmitPost(content) => submit_post(state, feed, content),

        // === Session ===
        Action::ToggleAuth => {
            if feed.is_authenticated() {
                let update = with_toast(
                    state,
                    "Logged out",
                    "You've been successfully logged out.",
                    ToastVariant::Default,
                );
                Update::with(update.ui, FeedAction::Logout)
            } else {
                let session = state.profile.clone();
                let update = with_toast(
                    state,
                    "Logged in",
                    "Welcome back to Serstation!",
                    ToastVariant::Default,
                );
                Update::with(update.ui, FeedAction::SetSession(Some(session)))
            }
        }

        Action::OpenProfile => {
            if feed.is_authenticated() {
                with_toast(state, "Profile", "Profile page coming soon!", ToastVariant::Default)
            } else {
                login_required(state, "Please log in to access your profile.")
            }
        }

        // === Store passthrough ===
        Action::Feed(action) => Update::with(state, action),

        // === Notifications ===
        Action::DismissToasts => Update::ui(UiState {
            toasts: Vec::new(),
            ..state
        }),
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
/// While the create-post panel is open, text keys belong to the editor and
/// never reach this function; only Esc is handled here.
fn handle_key(state: UiState, feed: &AppState, key: KeyEvent) -> Update {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, feed, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, feed, action);
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, feed, Action::HideHelp);
        }

        (KeyCode::Esc, _) if feed.create_post_panel_open => {
            return reduce(state, feed, Action::CloseComposer);
        }

        (KeyCode::Esc, _) if !state.toasts.is_empty() => {
            return reduce(state, feed, Action::DismissToasts);
        }

        _ => {}
    }

    if feed.create_post_panel_open || state.help_visible {
        return Update::ui(state);
    }

    let action = match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Action::CursorUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Action::CursorDown,
        (KeyCode::Tab, _) => Action::NextGroup,
        (KeyCode::BackTab, _) => Action::PrevGroup,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ShowAllGroups,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::LikeSelected,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::CommentSelected,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::ShareSelected,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::OpenComposer,
        (KeyCode::Char('u'), KeyModifiers::NONE) => Action::ToggleAuth,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::OpenProfile,
        _ => return Update::ui(state),
    };

    reduce(state, feed, action)
}

fn submit_post(state: UiState, feed: &AppState, content: String) -> Update {
    let Some(session) = feed.session.as_ref() else {
        return login_required(state, "Please log in to create a post.");
    };

    let content = content.trim().to_string();
    if content.is_empty() {
        return with_toast(
            state,
            "Empty post",
            "Write something before posting.",
            ToastVariant::Destructive,
        );
    }

    let group_id = feed
        .selected_group_id
        .clone()
        .or_else(|| feed.groups.first().map(|g| g.id.clone()))
        .unwrap_or_default();

    let update = with_toast(
        UiState { cursor: 0, ..state },
        "Post created",
        "Your post is live.",
        ToastVariant::Default,
    );
    Update::with(
        update.ui,
        FeedAction::AddPost(PostDraft::new(session.username.clone(), content, group_id)),
    )
}

/// Group id `step` positions away from the current filter. "All groups"
/// sits between the last and the first group.
fn step_group(feed: &AppState, step: isize) -> Option<String> {
    let slots = feed.groups.len() as isize + 1;
    let current = feed
        .selected_group_id
        .as_deref()
        .and_then(|id| feed.groups.iter().position(|g| g.id == id))
        .map_or(0, |i| i as isize + 1);

    let next = (current + step).rem_euclid(slots);
    if next == 0 {
        None
    } else {
        Some(feed.groups[(next - 1) as usize].id.clone())
    }
}

fn selected_post_id(state: &UiState, feed: &AppState) -> Option<String> {
    feed.visible_posts()
        .get(state.cursor)
        .map(|post| post.id.clone())
}

fn with_toast(state: UiState, title: &str, description: &str, variant: ToastVariant) -> Update {
    let toast = state.toast(title, description, variant);
    let mut toasts = state.toasts;
    toasts.push(toast);
    Update::ui(UiState { toasts, ..state })
}

fn login_required(state: UiState, description: &str) -> Update {
    with_toast(state, "Login required", description, ToastVariant::Destructive)
}
