//! End-to-end view flows against a real store
//!
//! Drives `App` with view actions and checks the resulting feed state.

use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libserstation::{seed, FixedClock, Store};
use serstation_tui::app::{Action, App, UiState};
use serstation_tui::ui::composer::ComposerWidget;

fn app() -> App {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    App::new(
        UiState::default(),
        Store::with_clock(seed::initial_state(now), FixedClock(now)),
    )
}

fn key(c: char) -> Action {
    Action::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn test_login_like_unlike() {
    let mut app = app();
    app.handle(key('u'));
    assert!(app.feed().is_authenticated());

    let before = app.feed().visible_posts()[0].like_count;
    app.handle(key('l'));
    let post = app.feed().visible_posts()[0];
    assert!(post.liked_by_current_user);
    assert_eq!(post.like_count, before + 1);

    app.handle(key('l'));
    let post = app.feed().visible_posts()[0];
    assert!(!post.liked_by_current_user);
    assert_eq!(post.like_count, before);
}

#[test]
fn test_like_while_anonymous_leaves_feed_untouched() {
    let mut app = app();
    let before = app.feed().clone();

    app.handle(key('l'));

    assert_eq!(app.feed(), &before);
    assert_eq!(app.ui.toasts[0].title, "Login required");
}

#[test]
fn test_compose_and_submit_through_widget() {
    let mut app = app();
    let mut composer = ComposerWidget::new();

    app.handle(key('u'));
    app.handle(Action::Feed(libserstation::Action::SetSelectedGroup(Some(
        "electric".to_string(),
    ))));
    app.handle(key('n'));
    assert!(app.feed().create_post_panel_open);

    for c in "Sideways on Sunday".chars() {
        let input = composer.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        assert!(input.into_action().is_none());
    }
    let submit = composer
        .input(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
        .into_action()
        .unwrap();
    app.handle(submit);

    assert!(!app.feed().create_post_panel_open);
    let post = &app.feed().posts[0];
    assert_eq!(post.content, "Sideways on Sunday");
    assert_eq!(post.author, "CarLover2024");
    assert_eq!(post.group_id, "electric");
    assert_eq!(post.like_count, 0);
    assert_eq!(post.id, "5");
    assert_eq!(app.feed().visible_posts().len(), 2);
    assert_eq!(app.ui.toasts.last().unwrap().title, "Post created");
}

#[test]
fn test_empty_submission_keeps_panel_open() {
    let mut app = app();
    app.handle(key('u'));
    app.handle(key('n'));

    app.handle(Action::SubmitPost("   ".to_string()));

    assert!(app.feed().create_post_panel_open);
    assert_eq!(app.feed().posts.len(), 4);
    assert_eq!(app.ui.toasts.last().unwrap().title, "Empty post");
}

#[test]
fn test_submit_after_logout_is_rejected() {
    let mut app = app();
    app.handle(key('u'));
    app.handle(key('n'));

    app.handle(Action::ToggleAuth);
    app.handle(Action::SubmitPost("still here".to_string()));

    assert!(!app.feed().is_authenticated());
    assert_eq!(app.feed().posts.len(), 4);
    assert_eq!(app.ui.toasts.last().unwrap().title, "Login required");
}

#[test]
fn test_group_cycle_filters_feed() {
    let mut app = app();

    app.handle(Action::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
    assert_eq!(app.feed().selected_group_id.as_deref(), Some("beask"));
    assert!(app
        .feed()
        .visible_posts()
        .iter()
        .all(|p| p.group_id == "beask"));

    app.handle(key('a'));
    assert_eq!(app.feed().selected_group_id, None);
    assert_eq!(app.feed().visible_posts().len(), 4);
}

#[test]
fn test_into_store_keeps_final_state() {
    let mut app = app();
    app.handle(key('u'));

    let state = app.into_store().into_state();
    assert!(state.is_authenticated());
}
