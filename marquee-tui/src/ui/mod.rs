//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Render functions have no side effects on application state.

use libmarquee::{Listing, MovieDetail, PosterSize, Rating};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, InputMode, ModalPhase};

/// Render the application UI
///
/// Main rendering entry point: the listing screen, then whichever
/// overlays the state calls for, error on top.
pub fn render(frame: &mut Frame, state: &AppState, search_input: &TextArea<'_>) {
    let area = frame.area();

    render_browse(frame, area, state, search_input);

    match &state.modal.phase {
        ModalPhase::Closed => {}
        ModalPhase::Opening { .. } => render_modal_loading(frame, area),
        ModalPhase::Open { detail, rating } => render_modal(frame, area, state, detail, rating),
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

/// Render the listing screen
fn render_browse(frame: &mut Frame, area: Rect, state: &AppState, search_input: &TextArea<'_>) {
    // Create layout: header + list + footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Movie list
            Constraint::Length(3), // Search line or status bar
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    render_movie_list(frame, chunks[1], state);

    if state.input_mode == InputMode::Search {
        frame.render_widget(search_input, chunks[2]);
    } else {
        render_status_bar(frame, chunks[2], state);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.browse.session.listing() {
        Listing::Popular => "인기 영화".to_string(),
        Listing::Search => match state.browse.session.query() {
            Some(query) => format!("검색: {}", query),
            None => "검색".to_string(),
        },
    };

    let page_info = if state.browse.total_pages > 0 {
        format!(
            "{} / {} 페이지",
            state.browse.session.page(),
            state.browse.total_pages
        )
    } else {
        String::new()
    };

    let line = Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(page_info, Style::default().fg(Color::DarkGray)),
    ]);

    let header =
        Paragraph::new(line).block(Block::default().title(" Marquee ").borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_movie_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if state.browse.loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = if state.browse.loading {
        " 영화 목록 (불러오는 중...) "
    } else {
        " 영화 목록 "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if state.browse.movies.is_empty() {
        let message = if state.browse.loading {
            ""
        } else {
            "결과가 없습니다."
        };
        let placeholder = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }

    let star = if state.config.unicode_enabled {
        "★"
    } else {
        "*"
    };
    let vote_style = if state.config.colors_enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = state
        .browse
        .movies
        .iter()
        .map(|movie| {
            ListItem::new(Line::from(vec![
                Span::raw(movie.title.clone()),
                Span::styled(format!("  {} {}", star, movie.vote_display()), vote_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.browse.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render status message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.can_load_more() {
        "/: 검색 | p: 인기 영화 | n: 다음 페이지 | Enter: 상세 | q: 종료"
    } else {
        "/: 검색 | p: 인기 영화 | Enter: 상세 | q: 종료"
    };
    let hint_span = Span::styled(hints, Style::default().fg(Color::DarkGray));

    let line = match state.status.message {
        Some(ref message) => Line::from(vec![
            Span::raw(message.clone()),
            Span::raw("  |  "),
            hint_span,
        ]),
        None => Line::from(hint_span),
    };

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

/// Small overlay while a detail fetch is in flight
fn render_modal_loading(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(40, 20, area);

    let loading = Paragraph::new(vec![
        Line::from("상세 정보를 불러오는 중..."),
        Line::from(Span::styled(
            "Esc: 취소",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area); // Clear background
    frame.render_widget(loading, popup_area);
}

/// Render the detail modal with its rating row
fn render_modal(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    detail: &MovieDetail,
    rating: &Rating,
) {
    let popup_area = centered_rect(70, 80, area);

    let star_style = if state.config.colors_enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let (filled, empty) = if state.config.unicode_enabled {
        ("★", "☆")
    } else {
        ("*", "-")
    };
    let stars: String = rating
        .fill()
        .iter()
        .map(|&on| if on { filled } else { empty })
        .collect();

    let mut lines = vec![Line::from(vec![
        Span::styled(detail.genres_line(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(format!("평점 {}", detail.vote_display()), star_style),
    ])];

    if let Some(url) = detail.poster_url(&state.config.image_base, PosterSize::W342) {
        lines.push(Line::from(Span::styled(
            url,
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(detail.overview_text()));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("내 별점  "),
        Span::styled(stars, star_style),
        Span::raw(format!("  {}점  ", rating.score())),
        Span::styled(
            rating.message(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "1-5: 별점 | Esc: 닫기",
        Style::default().fg(Color::DarkGray),
    )));

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", detail.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(modal, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "오류",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Esc: 닫기"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" 오류 ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
