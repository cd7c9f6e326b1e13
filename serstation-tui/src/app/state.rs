//! View state
//!
//! Everything the terminal needs that is not feed data: cursor, overlays,
//! toasts. Feed data lives in the `libserstation::Store`.

use libserstation::config::{ProfileConfig, UiConfig};
use libserstation::Session;

/// Root view state
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Index into the visible posts
    pub cursor: usize,

    /// Ticks since start
    pub tick: u64,

    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,

    /// Identity used by the mock login
    pub profile: Session,

    /// UI configuration
    pub config: UiConfig,
}

/// Ephemeral notification. Never stored in the feed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    /// Tick at which the toast disappears
    pub expires_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ProfileConfig::default().session(), UiConfig::default())
    }
}

impl UiState {
    pub fn new(profile: Session, config: UiConfig) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            cursor: 0,
            tick: 0,
            toasts: Vec::new(),
            profile,
            config,
        }
    }

    /// Toast that lives for the configured number of ticks from now
    pub fn toast(&self, title: &str, description: &str, variant: ToastVariant) -> Toast {
        Toast {
            title: title.to_string(),
            description: description.to_string(),
            variant,
            expires_at: self.tick + self.config.toast_ticks,
        }
    }

    /// Keep the cursor inside a list of `len` posts
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
