//! Error types for serstation-tui
//!
//! Wraps store errors and terminal I/O errors for unified handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Store or configuration error
    #[error("Store error: {0}")]
    Store(#[from] libserstation::StoreError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
