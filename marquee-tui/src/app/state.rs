//! Application state
//!
//! Immutable state structure following functional programming principles.
//! All state transitions happen through the reducer (see `reducer.rs`).

use libmarquee::config::MOVIE_IMAGE_BASE_URL;
use libmarquee::{MovieDetail, MovieSummary, Rating, Session};

use super::actions::InputMode;

/// Root application state
///
/// This is the single source of truth for the entire application.
/// State transitions are pure functions that return new state values.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Where keyboard input goes
    pub input_mode: InputMode,

    /// Listing screen state
    pub browse: BrowseState,

    /// Detail modal state
    pub modal: ModalState,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Listing screen state
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    /// Listing, page, and query the next fetch is built from
    pub session: Session,

    /// Accumulated results; later pages append to them
    pub movies: Vec<MovieSummary>,

    /// Cursor position in `movies`
    pub selected: usize,

    /// Total pages reported by the last accepted response
    pub total_pages: u32,

    /// Total results reported by the last accepted response
    pub total_results: u32,

    /// Listing fetch in flight?
    pub loading: bool,
}

/// Detail modal state
///
/// `generation` increments every time the modal closes. Detail responses
/// carry the generation they were dispatched under, so the reducer can
/// drop any response whose modal has closed (or closed and reopened)
/// while the fetch was in flight.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub phase: ModalPhase,
    pub generation: u64,
}

/// Modal lifecycle phase
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalPhase {
    /// No modal; the list has the keyboard
    #[default]
    Closed,

    /// Detail fetch dispatched, response not yet applied
    Opening { movie_id: u64 },

    /// Detail on screen with its rating row
    Open { detail: MovieDetail, rating: Rating },
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Image host used to compose poster URLs
    pub image_base: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        // Detect environment for sensible defaults
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("MARQUEE_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled; // Same heuristic for now

        let tick_rate_ms = std::env::var("MARQUEE_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
            image_base: MOVIE_IMAGE_BASE_URL.to_string(),
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The movie under the list cursor, if any
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.browse.movies.get(self.browse.selected)
    }

    /// Whether the detail modal is fully on screen
    pub fn modal_visible(&self) -> bool {
        matches!(self.modal.phase, ModalPhase::Open { .. })
    }

    /// Whether the next page of the current listing can be requested
    pub fn can_load_more(&self) -> bool {
        !self.browse.loading
            && !self.browse.movies.is_empty()
            && self.browse.session.page() < self.browse.total_pages
    }
}
