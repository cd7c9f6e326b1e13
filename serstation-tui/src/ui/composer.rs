//! Create-post panel backed by tui-textarea
//!
//! The editor text lives here, not in the store: only the submitted
//! content reaches the feed, as an `AddPost` draft.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};
use tui_textarea::TextArea;

use libserstation::AppState;

use crate::app::Action;

const PLACEHOLDER: &str = "What's happening in your garage? (Ctrl+S to post, Esc to cancel)";

/// What a key press in the panel amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerInput {
    /// Edited the text
    Edited,
    /// Should go to the view reducer instead
    Action(KeyEvent),
    Submit(String),
}

pub struct ComposerWidget<'a> {
    textarea: TextArea<'a>,
}

impl<'a> Default for ComposerWidget<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ComposerWidget<'a> {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PLACEHOLDER);
        Self { textarea }
    }

    /// Current content, lines joined with `\n`
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Route a key press. Ctrl+S submits, Esc/F1/Ctrl+C go to the reducer,
    /// everything else edits the text.
    pub fn input(&mut self, key: KeyEvent) -> ComposerInput {
        match (key.code, key.modifiers) {
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => ComposerInput::Submit(self.content()),
            (KeyCode::Esc, _)
            | (KeyCode::F(_), _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => ComposerInput::Action(key),
            _ => {
                self.textarea.input(key);
                ComposerInput::Edited
            }
        }
    }

    /// Render over `area`, titled with the target group
    pub fn render(&mut self, frame: &mut Frame, area: Rect, feed: &AppState) {
        let group = feed
            .selected_group_id
            .as_deref()
            .or_else(|| feed.groups.first().map(|g| g.id.as_str()))
            .and_then(|id| feed.group(id))
            .map_or("feed".to_string(), |g| g.display_name.clone());

        let border = if self.is_empty() { Color::Red } else { Color::Green };
        self.textarea.set_block(
            Block::default()
                .title(format!(" New post in {} ", group))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );

        frame.render_widget(Clear, area);
        frame.render_widget(&self.textarea, area);
    }
}

impl ComposerInput {
    /// The view action this input produces, if any
    pub fn into_action(self) -> Option<Action> {
        match self {
            ComposerInput::Edited => None,
            ComposerInput::Action(key) => Some(Action::Key(key)),
            ComposerInput::Submit(content) => Some(Action::SubmitPost(content)),
        }
    }
}
