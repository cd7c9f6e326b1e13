//! The state store
//!
//! `Store` owns the single `AppState` and is the only way to change it.
//! It is an ordinary value: create it at start-up, hand it (or `&mut` to it)
//! to whoever needs to dispatch, and call `into_state` at exit.
//!
//! ```
//! use libserstation::{Action, PostDraft, Store};
//!
//! let mut store = Store::seeded();
//! store.dispatch(Action::AddPost(PostDraft::new("X", "hi", "tuning")));
//! assert_eq!(store.state().posts.len(), 5);
//! ```

use chrono::{DateTime, Utc};

use crate::actions::{Action, Envelope};
use crate::config::Config;
use crate::error::Result;
use crate::reducer::{changes, reduce};
use crate::seed;
use crate::state::{AppState, StateSnapshot};

/// Source of "now" for new posts
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Identifier returned by `Store::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Callback invoked with the new state after every changing dispatch
pub type ChangeHandler = Box<dyn FnMut(&AppState)>;

struct HandlerEntry {
    id: SubscriptionId,
    handler: ChangeHandler,
}

/// Reducer-driven state container
pub struct Store {
    state: AppState,
    clock: Box<dyn Clock>,
    handlers: Vec<HandlerEntry>,
    next_id: u64,
}

impl Store {
    /// Create a store around an initial state, using the wall clock.
    pub fn new(initial: AppState) -> Self {
        Self::with_clock(initial, SystemClock)
    }

    /// Create a store with an explicit clock.
    pub fn with_clock(initial: AppState, clock: impl Clock + 'static) -> Self {
        tracing::info!(
            posts = initial.posts.len(),
            groups = initial.groups.len(),
            "store created"
        );
        Self {
            state: initial,
            clock: Box::new(clock),
            handlers: Vec::new(),
            next_id: 1,
        }
    }

    /// Store holding the built-in demo seed, dated relative to now.
    pub fn seeded() -> Self {
        let clock = SystemClock;
        Self::with_clock(seed::initial_state(clock.now()), clock)
    }

    /// Store built from configuration: configured seed, default group.
    pub fn from_config(config: &Config) -> Result<Self> {
        let clock = SystemClock;
        let initial = config.initial_state(clock.now())?;
        Ok(Self::with_clock(initial, clock))
    }

    /// Apply an action and notify subscribers if the state changed.
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let tag = action.tag();
        let changed = changes(&self.state, &action);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action, self.clock.now());

        tracing::debug!(
            action = tag,
            changed,
            session = %self.state.session_state(),
            posts = self.state.posts.len(),
            "dispatched"
        );

        if changed {
            self.notify();
        }
        changed
    }

    /// Decode a `{"type": ..., "payload": ...}` action and dispatch it.
    ///
    /// Unknown tags leave the state untouched and return `Ok(false)`.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<bool> {
        let envelope: Envelope = serde_json::from_str(raw)?;
        if !Action::is_known_tag(&envelope.kind) {
            tracing::debug!(action = %envelope.kind, "ignoring unknown action");
            return Ok(false);
        }

        let action: Action = serde_json::from_str(raw)?;
        Ok(self.dispatch(action))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// Register a change handler. Handlers run synchronously, in
    /// subscription order, after the new state is in place.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push(HandlerEntry {
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a handler. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|entry| entry.id != id);
        self.handlers.len() != before
    }

    /// Tear the store down and keep the final state.
    pub fn into_state(self) -> AppState {
        tracing::info!(posts = self.state.posts.len(), "store closed");
        self.state
    }

    fn notify(&mut self) {
        for entry in self.handlers.iter_mut() {
            (entry.handler)(&self.state);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
