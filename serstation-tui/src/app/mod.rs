//! Application module
//!
//! - Actions: what the user can do in the terminal
//! - State: cursor, overlays, toasts
//! - Reducer: pure `(UiState, &AppState, Action) -> Update`
//! - Controller: applies updates to the store

pub mod actions;
pub mod controller;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use controller::App;
pub use reducer::{reduce, Update};
pub use state::{Toast, ToastVariant, UiState};
