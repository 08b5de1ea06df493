//! marquee-tui library
//!
//! Exports types and modules for testing and reuse by the binary.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{reduce, Action, AppState};
pub use error::{Result, TuiError};
