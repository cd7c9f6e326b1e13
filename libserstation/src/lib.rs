//! Serstation - state store for a car-enthusiast community feed
//!
//! The library holds the whole feed in one `AppState` owned by a `Store`.
//! Views read the state and request changes by dispatching `Action`s; a
//! pure reducer computes each next state.

pub mod actions;
pub mod config;
pub mod error;
pub mod logging;
pub mod reducer;
pub mod seed;
pub mod state;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use actions::Action;
pub use config::Config;
pub use error::{ConfigError, Result, StoreError};
pub use reducer::{changes, reduce};
pub use state::{AppState, StateSnapshot};
pub use store::{Clock, FixedClock, Store, SubscriptionId, SystemClock};
pub use types::{Group, Post, PostDraft, Session, SessionState};
