//! UI rendering
//!
//! Render functions read the view state and the feed snapshot and draw;
//! they never change either.

pub mod composer;
pub mod feed;

use libserstation::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{Toast, ToastVariant, UiState};
use composer::ComposerWidget;

/// Render the whole screen
pub fn render(
    frame: &mut Frame,
    ui: &UiState,
    feed_state: &AppState,
    composer: &mut ComposerWidget,
) {
    let area = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(5),    // Sidebar + feed
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_navbar(frame, rows[0], ui, feed_state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(rows[1]);

    feed::render_sidebar(frame, columns[0], ui, feed_state);
    feed::render_feed(frame, columns[1], ui, feed_state);
    render_hints(frame, rows[2], feed_state);

    if feed_state.create_post_panel_open {
        composer.render(frame, centered_rect(70, 40, area), feed_state);
    }

    if ui.help_visible {
        render_help_overlay(frame, area);
    }

    render_toasts(frame, area, &ui.toasts);
}

/// Brand on the left, session on the right
fn render_navbar(frame: &mut Frame, area: Rect, ui: &UiState, feed: &AppState) {
    let brand_style = if ui.config.colors {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let session = match &feed.session {
        Some(session) => {
            let avatar = session.avatar.as_deref().unwrap_or("@");
            format!("{} {}  [u] Logout", avatar, session.username)
        }
        None => "[u] Login".to_string(),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Serstation", brand_style),
            Span::raw("   Loca Bar · Profiles · Car Info"),
        ]))
        .block(block.clone()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(session)
            .alignment(Alignment::Right)
            .block(block),
        chunks[1],
    );
}

fn render_hints(frame: &mut Frame, area: Rect, feed: &AppState) {
    let hints = if feed.create_post_panel_open {
        " Ctrl+S: Post | Esc: Cancel"
    } else {
        " j/k: Move | Tab: Group | l: Like | n: New post | u: Login/out | F1: Help | q: Quit"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::Gray))),
        area,
    );
}

/// Newest toast at the top-right corner, older ones stacked below
fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let width = 40.min(area.width);
    let mut y = area.y + 1;

    for toast in toasts.iter().rev() {
        if y + 4 > area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x + area.width - width, y, width, 4);
        let color = match toast.variant {
            ToastVariant::Default => Color::Green,
            ToastVariant::Destructive => Color::Red,
        };

        let widget = Paragraph::new(toast.description.as_str())
            .block(
                Block::default()
                    .title(format!(" {} ", toast.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
        y += 4;
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Feed:"),
        Line::from("  j / Down    - Next post"),
        Line::from("  k / Up      - Previous post"),
        Line::from("  Tab / S-Tab - Next / previous group"),
        Line::from("  a           - All groups"),
        Line::from("  l           - Like / unlike"),
        Line::from("  c / s       - Comment / share"),
        Line::from("  n           - New post"),
        Line::from(""),
        Line::from("Account:"),
        Line::from("  u           - Login / logout"),
        Line::from("  p           - Profile"),
        Line::from(""),
        Line::from("  Esc         - Close overlay, dismiss toasts"),
        Line::from("  q           - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
