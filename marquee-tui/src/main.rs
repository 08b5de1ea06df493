//! marquee-tui - Terminal UI for Marquee
//!
//! Browse the TMDB catalog from the terminal: popular listing, search,
//! and a detail modal with a five-star rating row.

use crossterm::event::KeyCode;
use marquee_tui::{
    app::{
        action_for_key,
        event::{EventHandler, TuiEvent},
        reduce, Action, AppState, InputMode,
    },
    error::{Result, TuiError},
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui,
};

fn main() -> Result<()> {
    // Build the service layer before touching the terminal so a
    // configuration problem prints a readable message instead of dying
    // inside the alternate screen.
    let services = match ServiceHandle::new() {
        Ok(services) => services,
        Err(TuiError::Service(e)) => {
            eprintln!("marquee-tui: {}", e);
            std::process::exit(e.exit_code());
        }
        Err(e) => return Err(e),
    };

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &services);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut marquee_tui::terminal::Tui, services: &ServiceHandle) -> Result<()> {
    // Initialize application state
    let mut state = AppState::new();
    state.config.image_base = services.image_base();

    let service_rx = services.events();

    // Search input line (stateful widget)
    let mut search_input = new_search_input();

    // Create event handler with tick rate from config
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // First frame needs data behind it
    state = reduce(state, Action::ShowPopular);
    services.fetch_list(state.browse.session.snapshot());

    // Main event loop
    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state, &search_input);
        })?;

        let tui_event = event_handler.next()?;

        // Keys typed into the search line go to the textarea, not the
        // reducer; Enter submits what was typed, Esc backs out.
        let action: Option<Action> = match tui_event {
            TuiEvent::Key(key) => {
                let searching = state.input_mode == InputMode::Search && state.error.is_none();
                if searching {
                    match key.code {
                        KeyCode::Enter => {
                            let query = search_input.lines().join(" ").trim().to_string();
                            if query.is_empty() {
                                None
                            } else {
                                Some(Action::SubmitSearch(query))
                            }
                        }
                        KeyCode::Esc => Some(Action::LeaveSearchInput),
                        _ => {
                            search_input.input(key);
                            None
                        }
                    }
                } else {
                    action_for_key(&state, key)
                }
            }
            other => Some(other.into()),
        };

        if let Some(action) = action {
            // Update state through reducer
            state = reduce(state, action.clone());

            // Run the fetch side effects the action asks for
            match action {
                Action::ShowPopular | Action::SubmitSearch(_) | Action::LoadNextPage => {
                    services.fetch_list(state.browse.session.snapshot());
                }
                Action::OpenDetail(movie_id) => {
                    services.fetch_detail(movie_id, state.modal.generation);
                }
                Action::SelectStar(_) => {
                    // TODO: persist the chosen score once ratings have a storage layer
                }
                _ => {}
            }
        }

        // Apply fetch completions that arrived since the last frame
        while let Ok(event) = service_rx.try_recv() {
            state = reduce(state, event.into());
        }

        // The search line is cleared once it loses focus
        if state.input_mode == InputMode::Browse && !search_input.is_empty() {
            search_input = new_search_input();
        }

        // Check if we should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn new_search_input() -> tui_textarea::TextArea<'static> {
    let mut input = tui_textarea::TextArea::default();
    input.set_placeholder_text("검색어를 입력하세요 (Enter: 검색, Esc: 취소)");
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_block(
        ratatui::widgets::Block::default()
            .title(" 검색 ")
            .borders(ratatui::widgets::Borders::ALL)
            .border_style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow)),
    );
    input
}
