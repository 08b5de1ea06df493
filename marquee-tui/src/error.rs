//! Error types for marquee-tui
//!
//! Wraps catalog client errors and terminal/IO errors for unified
//! error handling in the event loop.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Catalog client error
    #[error("Service error: {0}")]
    Service(#[from] libmarquee::MarqueeError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
