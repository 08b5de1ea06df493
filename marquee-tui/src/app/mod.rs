//! Application module
//!
//! Contains the core application architecture:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//!
//! This follows functional programming principles with immutable state
//! and pure functions for state transitions.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, InputMode};
pub use reducer::{action_for_key, reduce};
pub use state::{AppState, BrowseState, ModalPhase, ModalState, StatusBarState, UiConfig};
