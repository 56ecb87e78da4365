//! Tests for the screen layout.

use super::*;
use crate::model::KeyAction;
use crate::source::DataSet;
use crate::state::AppOptions;
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

fn state() -> AppState {
    AppState::new(DataSet::builtin().unwrap(), AppOptions::default()).unwrap()
}

fn render(state: &AppState) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, Theme::new(ColorConfig::with_colors(false))))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn dashboard_header_shows_greeting_and_empty_caption() {
    let rows = render(&state());

    assert!(rows[3].starts_with("Welcome back, User"));
    // Nothing typed yet: only the cursor.
    assert_eq!(rows[4].trim_end(), "▌");
}

#[test]
fn caption_types_as_ticks_fire() {
    let mut state = state();
    state.captions.advance_to(Duration::from_millis(150));

    let rows = render(&state);
    assert_eq!(rows[4].trim_end(), "Ready▌");
}

#[test]
fn complete_caption_has_no_cursor() {
    let mut state = state();
    state.captions.advance_to(Duration::from_secs(60));

    let rows = render(&state);
    assert_eq!(
        rows[4].trim_end(),
        "Ready to strengthen your legal arguments..."
    );
}

#[test]
fn list_page_header_uses_page_title() {
    let mut state = state();
    state.apply(KeyAction::GoToPage(Page::Cases)).unwrap();

    let rows = render(&state);
    assert!(rows[3].starts_with("Case Management"));
    assert!(rows.iter().any(|row| row.contains("Showing 6 of 6 cases")));
}

#[test]
fn status_bar_switches_to_typing_hints() {
    let mut state = state();
    state.apply(KeyAction::GoToPage(Page::Precedents)).unwrap();

    let rows = render(&state);
    assert!(rows[39].contains("/ search"));

    state.apply(KeyAction::StartSearch).unwrap();
    let rows = render(&state);
    assert!(rows[39].contains("Enter keep query"));
}

#[test]
fn help_overlay_drawn_on_top() {
    let mut state = state();
    state.apply(KeyAction::Help).unwrap();

    let rows = render(&state);
    assert!(rows.iter().any(|row| row.contains("Keyboard Shortcuts")));
}
