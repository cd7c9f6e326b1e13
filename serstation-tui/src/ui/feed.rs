//! Post feed and group sidebar

use chrono::{DateTime, Utc};
use libserstation::{AppState, Post};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::UiState;

/// "just now", "5m ago", "2h ago", "3d ago"
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

/// Group list with the active filter highlighted
pub fn render_sidebar(frame: &mut Frame, area: Rect, ui: &UiState, feed: &AppState) {
    let selected = feed.selected_group_id.as_deref();
    let highlight = accent(ui).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(
        "All groups",
        if selected.is_none() { highlight } else { Style::default() },
    ))];

    lines.extend(feed.groups.iter().map(|group| {
        let label = match &group.icon {
            Some(icon) => format!("{} {}", icon, group.display_name),
            None => group.display_name.clone(),
        };
        let style = if selected == Some(group.id.as_str()) {
            highlight
        } else {
            Style::default()
        };
        Line::from(Span::styled(label, style))
    }));

    let sidebar = Paragraph::new(lines)
        .block(Block::default().title(" Groups ").borders(Borders::ALL));
    frame.render_widget(sidebar, area);
}

/// Visible posts, newest first, with the cursor row highlighted
pub fn render_feed(frame: &mut Frame, area: Rect, ui: &UiState, feed: &AppState) {
    let title = match feed.selected_group_id.as_deref() {
        Some(id) => {
            let name = feed.group(id).map_or(id, |g| g.display_name.as_str());
            format!(" Feed: {} ", name)
        }
        None => " Feed ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let posts = feed.visible_posts();
    if posts.is_empty() {
        let empty = Paragraph::new("No posts in this group yet. Press n to write one.")
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    let now = Utc::now();
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| ListItem::new(post_text(post, ui, now, width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(ui.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn post_text(post: &Post, ui: &UiState, now: DateTime<Utc>, width: usize) -> Text<'static> {
    let heart = match (post.liked_by_current_user, ui.config.colors) {
        (true, true) => "♥",
        (false, true) => "♡",
        (true, false) => "[liked]",
        (false, false) => "[like]",
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(post.author.clone(), accent(ui).add_modifier(Modifier::BOLD)),
        Span::raw(" · "),
        Span::styled(
            format!("{} · #{}", relative_time(post.created_at, now), post.group_id),
            Style::default().fg(Color::Gray),
        ),
    ])];

    lines.extend(wrap(&post.content, width).into_iter().map(Line::from));

    lines.push(Line::from(Span::styled(
        format!(
            "{} {}   comments {}   shares {}",
            heart, post.like_count, post.comment_count, post.share_count
        ),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    Text::from(lines)
}

/// Greedy word wrap; list items do not wrap on their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn accent(ui: &UiState) -> Style {
    if ui.config.colors {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}
