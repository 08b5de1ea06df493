//! Detail modal lifecycle tests
//!
//! Exercises the open/load/close state machine through the reducer,
//! including fetches that resolve after their modal has already closed.

use libmarquee::{Genre, MovieDetail};
use marquee_tui::app::{reduce, Action, AppState, ModalPhase};

fn sample_detail(id: u64, title: &str) -> MovieDetail {
    MovieDetail {
        id,
        title: title.to_string(),
        poster_path: Some("/poster.jpg".to_string()),
        overview: Some("전원 백수로 살 길 막막하지만...".to_string()),
        genres: vec![Genre {
            id: 18,
            name: "드라마".to_string(),
        }],
        vote_average: 8.2,
    }
}

/// Open a movie and resolve its fetch in one go
fn open_loaded(state: AppState, id: u64, title: &str) -> AppState {
    let state = reduce(state, Action::OpenDetail(id));
    let generation = state.modal.generation;
    reduce(
        state,
        Action::DetailLoaded {
            generation,
            detail: sample_detail(id, title),
        },
    )
}

#[test]
fn test_open_dispatches_then_shows_detail() {
    let state = AppState::new();

    let state = reduce(state, Action::OpenDetail(496243));
    assert!(matches!(
        state.modal.phase,
        ModalPhase::Opening { movie_id: 496243 }
    ));

    let generation = state.modal.generation;
    let state = reduce(
        state,
        Action::DetailLoaded {
            generation,
            detail: sample_detail(496243, "기생충"),
        },
    );

    match &state.modal.phase {
        ModalPhase::Open { detail, rating } => {
            assert_eq!(detail.title, "기생충");
            assert_eq!(rating.selected(), None);
        }
        other => panic!("expected open modal, got {:?}", other),
    }
}

#[test]
fn test_close_bumps_generation() {
    let state = open_loaded(AppState::new(), 1, "첫 번째");
    let generation = state.modal.generation;

    let state = reduce(state, Action::CloseModal);

    assert_eq!(state.modal.phase, ModalPhase::Closed);
    assert_eq!(state.modal.generation, generation + 1);
}

#[test]
fn test_close_is_idempotent() {
    let state = open_loaded(AppState::new(), 1, "첫 번째");
    let state = reduce(state, Action::CloseModal);
    let generation = state.modal.generation;

    let state = reduce(state, Action::CloseModal);

    assert_eq!(state.modal.phase, ModalPhase::Closed);
    assert_eq!(state.modal.generation, generation);
}

#[test]
fn test_detail_resolving_after_close_is_dropped() {
    let state = AppState::new();
    let state = reduce(state, Action::OpenDetail(1));
    let stale_generation = state.modal.generation;

    let state = reduce(state, Action::CloseModal);
    let state = reduce(
        state,
        Action::DetailLoaded {
            generation: stale_generation,
            detail: sample_detail(1, "유령"),
        },
    );

    assert_eq!(state.modal.phase, ModalPhase::Closed);
}

#[test]
fn test_detail_resolving_after_reopen_is_dropped() {
    // Open movie 1, close, reopen movie 2: the late response for movie 1
    // must not repaint movie 2's modal
    let state = AppState::new();
    let state = reduce(state, Action::OpenDetail(1));
    let stale_generation = state.modal.generation;

    let state = reduce(state, Action::CloseModal);
    let state = reduce(state, Action::OpenDetail(2));
    let fresh_generation = state.modal.generation;
    assert_ne!(stale_generation, fresh_generation);

    let state = reduce(
        state,
        Action::DetailLoaded {
            generation: stale_generation,
            detail: sample_detail(1, "유령"),
        },
    );
    assert!(matches!(
        state.modal.phase,
        ModalPhase::Opening { movie_id: 2 }
    ));

    let state = reduce(
        state,
        Action::DetailLoaded {
            generation: fresh_generation,
            detail: sample_detail(2, "괴물"),
        },
    );
    match &state.modal.phase {
        ModalPhase::Open { detail, .. } => assert_eq!(detail.id, 2),
        other => panic!("expected open modal, got {:?}", other),
    }
}

#[test]
fn test_overlapping_opens_last_resolution_wins() {
    // Two opens without a close in between share a generation; whichever
    // response lands last is the one on screen
    let state = AppState::new();
    let state = reduce(state, Action::OpenDetail(1));
    let state = reduce(state, Action::OpenDetail(2));
    let generation = state.modal.generation;

    let state = reduce(
        state,
        Action::DetailLoaded {
            generation,
            detail: sample_detail(2, "괴물"),
        },
    );
    let state = reduce(
        state,
        Action::DetailLoaded {
            generation,
            detail: sample_detail(1, "유령"),
        },
    );

    match &state.modal.phase {
        ModalPhase::Open { detail, .. } => assert_eq!(detail.id, 1),
        other => panic!("expected open modal, got {:?}", other),
    }
}

#[test]
fn test_failed_detail_closes_modal_with_message() {
    let state = AppState::new();
    let state = reduce(state, Action::OpenDetail(7));
    let generation = state.modal.generation;

    let state = reduce(
        state,
        Action::DetailFailed {
            generation,
            message: "404 컨텐츠를 찾을 수 없습니다.".to_string(),
        },
    );

    assert_eq!(state.modal.phase, ModalPhase::Closed);
    assert_eq!(state.modal.generation, generation + 1);
    assert_eq!(
        state.error.as_deref(),
        Some("404 컨텐츠를 찾을 수 없습니다.")
    );
}

#[test]
fn test_stale_failure_is_dropped() {
    let state = open_loaded(AppState::new(), 2, "괴물");
    let state = reduce(state, Action::CloseModal);
    let state = reduce(state, Action::OpenDetail(3));

    let state = reduce(
        state,
        Action::DetailFailed {
            generation: 0,
            message: "500 서버에서 문제가 발생했습니다.".to_string(),
        },
    );

    assert!(state.error.is_none());
    assert!(matches!(
        state.modal.phase,
        ModalPhase::Opening { movie_id: 3 }
    ));
}

#[test]
fn test_replacement_detail_resets_rating() {
    // A second resolution under the same generation replaces the open
    // modal and starts a fresh rating
    let state = open_loaded(AppState::new(), 1, "유령");
    let state = reduce(state, Action::SelectStar(4));

    let generation = state.modal.generation;
    let state = reduce(
        state,
        Action::DetailLoaded {
            generation,
            detail: sample_detail(2, "괴물"),
        },
    );

    match &state.modal.phase {
        ModalPhase::Open { detail, rating } => {
            assert_eq!(detail.id, 2);
            assert_eq!(rating.selected(), None);
        }
        other => panic!("expected open modal, got {:?}", other),
    }
}
