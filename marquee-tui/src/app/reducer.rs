//! Pure reducer function for state transitions
//!
//! Following functional programming principles, the reducer is a pure function:
//! `(State, Action) -> State`
//!
//! The reducer has NO side effects - it only computes new state values.
//! Fetches are dispatched by the event loop after it sees the reduced
//! action; their results come back as further actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libmarquee::{Listing, MovieListPage, Rating, SessionSnapshot};

use super::actions::{Action, InputMode};
use super::state::{AppState, BrowseState, ModalPhase, ModalState, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No network requests
/// - No file I/O
/// - No mutations (returns new state)
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match action_for_key(&state, key) {
            Some(mapped) => reduce(state, mapped),
            None => state,
        },
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Listing ===
        Action::ShowPopular => {
            let mut browse = state.browse.clone();
            browse.session.browse_popular();
            browse.loading = true;
            AppState {
                browse,
                input_mode: InputMode::Browse,
                status: StatusBarState::default(),
                ..state
            }
        }

        Action::SubmitSearch(query) => {
            let mut browse = state.browse.clone();
            browse.session.begin_search(query);
            browse.loading = true;
            AppState {
                browse,
                input_mode: InputMode::Browse,
                status: StatusBarState::default(),
                ..state
            }
        }

        Action::LoadNextPage => {
            let mut browse = state.browse.clone();
            browse.session.advance_page();
            browse.loading = true;
            AppState { browse, ..state }
        }

        Action::ListLoaded { snapshot, page } => {
            // A response for a listing the user has since left is stale
            if snapshot == state.browse.session.snapshot() {
                apply_list_page(state, snapshot, page)
            } else {
                state
            }
        }

        Action::ListFailed { message } => AppState {
            browse: BrowseState {
                loading: false,
                ..state.browse.clone()
            },
            error: Some(message),
            ..state
        },

        Action::SelectNext => {
            let last = state.browse.movies.len().saturating_sub(1);
            let selected = (state.browse.selected + 1).min(last);
            AppState {
                browse: BrowseState {
                    selected,
                    ..state.browse.clone()
                },
                ..state
            }
        }

        Action::SelectPrevious => {
            let selected = state.browse.selected.saturating_sub(1);
            AppState {
                browse: BrowseState {
                    selected,
                    ..state.browse.clone()
                },
                ..state
            }
        }

        // === Search input ===
        Action::EnterSearchInput => AppState {
            input_mode: InputMode::Search,
            ..state
        },

        Action::LeaveSearchInput => AppState {
            input_mode: InputMode::Browse,
            ..state
        },

        // === Detail modal ===
        Action::OpenDetail(movie_id) => AppState {
            modal: ModalState {
                phase: ModalPhase::Opening { movie_id },
                generation: state.modal.generation,
            },
            ..state
        },

        Action::DetailLoaded { generation, detail } => {
            // Closing bumps the generation, so a match means the modal has
            // been waiting on this dispatch since it was made
            if generation == state.modal.generation {
                AppState {
                    modal: ModalState {
                        phase: ModalPhase::Open {
                            detail,
                            rating: Rating::new(),
                        },
                        generation,
                    },
                    ..state
                }
            } else {
                state
            }
        }

        Action::DetailFailed {
            generation,
            message,
        } => {
            if generation == state.modal.generation {
                let closed = close_modal(state);
                AppState {
                    error: Some(message),
                    ..closed
                }
            } else {
                state
            }
        }

        Action::CloseModal => close_modal(state),

        Action::SelectStar(index) => {
            if let ModalPhase::Open { detail, mut rating } = state.modal.phase.clone() {
                rating.select(index);
                AppState {
                    modal: ModalState {
                        phase: ModalPhase::Open { detail, rating },
                        generation: state.modal.generation,
                    },
                    ..state
                }
            } else {
                state
            }
        }

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },
    }
}

/// Merge an accepted listing page into browse state. The first page replaces
/// the accumulated results; later pages append to them.
fn apply_list_page(state: AppState, snapshot: SessionSnapshot, page: MovieListPage) -> AppState {
    let mut browse = state.browse.clone();
    browse.loading = false;
    browse.total_pages = page.total_pages;
    browse.total_results = page.total_results;

    if snapshot.page <= 1 {
        browse.movies = page.results;
        browse.selected = 0;
    } else {
        browse.movies.extend(page.results);
    }

    let status = match snapshot.listing {
        Listing::Search => StatusBarState {
            message: snapshot
                .query
                .as_deref()
                .map(|query| format!("\"{}\" 검색 결과 {}건", query, browse.total_results)),
        },
        Listing::Popular => StatusBarState::default(),
    };

    AppState {
        browse,
        status,
        ..state
    }
}

/// Close the detail modal. Every close bumps the generation so a detail
/// response still in flight is recognized as stale when it lands. Closing
/// an already-closed modal changes nothing.
fn close_modal(state: AppState) -> AppState {
    if matches!(state.modal.phase, ModalPhase::Closed) {
        state
    } else {
        AppState {
            modal: ModalState {
                phase: ModalPhase::Closed,
                generation: state.modal.generation + 1,
            },
            ..state
        }
    }
}

/// Map a key press to the action it triggers in the current state.
///
/// This is where keybindings are defined. The event loop calls it before
/// reducing so it can also run the fetch side effects the mapped action
/// asks for; `Action::Key` routes through it too, so tests can drive raw
/// key events.
pub fn action_for_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    // An error overlay takes the keyboard until it is dismissed
    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    // The modal owns input from the moment its fetch is dispatched until
    // it closes; the list behind it cannot scroll
    match state.modal.phase {
        ModalPhase::Closed => browse_action_for_key(state, key),
        _ => modal_action_for_key(key),
    }
}

/// Keys while the modal is opening or open
fn modal_action_for_key(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Char('q'), _) => Some(Action::CloseModal),
        (KeyCode::Char(c @ '1'..='5'), KeyModifiers::NONE) => {
            Some(Action::SelectStar(c as u8 - b'1'))
        }
        _ => None,
    }
}

/// Keys while the list has the keyboard
fn browse_action_for_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    if state.input_mode == InputMode::Search {
        // The event loop feeds everything else to the search line
        return match key.code {
            KeyCode::Esc => Some(Action::LeaveSearchInput),
            _ => None,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(Action::EnterSearchInput),
        (KeyCode::Char('p'), KeyModifiers::NONE) => Some(Action::ShowPopular),
        (KeyCode::Char('n'), KeyModifiers::NONE) if state.can_load_more() => {
            Some(Action::LoadNextPage)
        }
        (KeyCode::Down | KeyCode::Char('j'), KeyModifiers::NONE) => Some(Action::SelectNext),
        (KeyCode::Up | KeyCode::Char('k'), KeyModifiers::NONE) => Some(Action::SelectPrevious),
        (KeyCode::Enter, _) => state
            .selected_movie()
            .map(|movie| Action::OpenDetail(movie.id)),
        _ => None,
    }
}
