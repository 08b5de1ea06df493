//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::KeyEvent;
use libmarquee::{MovieDetail, MovieListPage, SessionSnapshot};

/// Actions that trigger state transitions
///
/// Actions are immutable data structures that describe what should
/// happen. The reducer (see `reducer.rs`) applies them to state; the
/// event loop runs the fetch side effects they ask for.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick for progress updates
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Listing ===
    /// Switch to the popular listing and fetch its first page
    ShowPopular,

    /// Start a search for the given query
    SubmitSearch(String),

    /// Fetch the next page of the current listing
    LoadNextPage,

    /// A listing page arrived, tagged with the frozen session view it
    /// was fetched for
    ListLoaded {
        snapshot: SessionSnapshot,
        page: MovieListPage,
    },

    /// A listing fetch failed
    ListFailed { message: String },

    /// Move the list cursor down
    SelectNext,

    /// Move the list cursor up
    SelectPrevious,

    // === Search input ===
    /// Focus the search input line
    EnterSearchInput,

    /// Leave the search input line without searching
    LeaveSearchInput,

    // === Detail modal ===
    /// Open the detail modal for a movie; its fetch is dispatched by
    /// the event loop
    OpenDetail(u64),

    /// A detail record arrived, tagged with its dispatch generation
    DetailLoaded { generation: u64, detail: MovieDetail },

    /// A detail fetch failed
    DetailFailed { generation: u64, message: String },

    /// Close the detail modal
    CloseModal,

    /// Select a star in the rating row (0-based index)
    SelectStar(u8),

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,

    /// Quit the application
    Quit,
}

/// Keyboard focus: list navigation or the search input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys drive the movie list
    #[default]
    Browse,

    /// Keys go to the search line
    Search,
}
