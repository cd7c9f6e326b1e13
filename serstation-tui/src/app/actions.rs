//! Actions for the view reducer
//!
//! View actions change what the terminal shows. Anything that changes feed
//! data is turned into a `libserstation::Action` and dispatched to the store.

use crossterm::event::KeyEvent;

/// Actions that trigger view state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick, used to expire toasts
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move the feed cursor up
    CursorUp,

    /// Move the feed cursor down
    CursorDown,

    /// Filter by the next group, wrapping through "all groups"
    NextGroup,

    /// Filter by the previous group
    PrevGroup,

    /// Drop the group filter
    ShowAllGroups,

    // === Post interactions ===
    LikeSelected,
    CommentSelected,
    ShareSelected,

    // === Create-post panel ===
    OpenComposer,
    CloseComposer,

    /// Submit the composer content as a new post
    SubmitPost(String),

    // === Session ===
    /// Mock login when signed out, logout when signed in
    ToggleAuth,

    /// Profile button from the navbar
    OpenProfile,

    // === Store passthrough ===
    /// Dispatch a store action unchanged
    Feed(libserstation::Action),

    // === Notifications ===
    /// Dismiss every visible toast
    DismissToasts,
}
