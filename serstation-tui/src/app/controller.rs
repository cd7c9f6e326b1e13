//! Glue between the view reducer and the store
//!
//! `App` owns the store for the lifetime of the terminal session. Each view
//! action is reduced, the resulting store actions are dispatched, and the
//! cursor is re-clamped against the new feed.

use libserstation::{AppState, Store};

use super::actions::Action;
use super::reducer::reduce;
use super::state::UiState;

pub struct App {
    pub ui: UiState,
    store: Store,
}

impl App {
    pub fn new(ui: UiState, store: Store) -> Self {
        Self { ui, store }
    }

    pub fn feed(&self) -> &AppState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    /// Reduce a view action and dispatch whatever it asks of the store.
    pub fn handle(&mut self, action: Action) {
        let ui = std::mem::take(&mut self.ui);
        let update = reduce(ui, self.store.state(), action);
        self.ui = update.ui;

        for feed_action in update.dispatch {
            self.store.dispatch(feed_action);
        }

        let visible = self.store.state().visible_posts().len();
        self.ui.clamp_cursor(visible);
    }

    /// Tear down and hand back the store.
    pub fn into_store(self) -> Store {
        self.store
    }
}
