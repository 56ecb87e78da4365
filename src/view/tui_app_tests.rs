//! Tests for key handling and the caption clock of the TUI app.

use super::*;
use crate::model::Page;
use crate::source::DataSet;
use crate::state::{AppOptions, SearchState};
use ratatui::backend::TestBackend;

fn app() -> TuiApp<TestBackend> {
    let state = AppState::new(DataSet::builtin().unwrap(), AppOptions::default()).unwrap();
    let terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    TuiApp::new_for_test(terminal, state)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
    for ch in text.chars() {
        assert!(!app.handle_key(key(KeyCode::Char(ch))).unwrap());
    }
}

fn screen(app: &TuiApp<TestBackend>) -> String {
    app.terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn q_quits() {
    let mut app = app();
    assert!(app.handle_key(key(KeyCode::Char('q'))).unwrap());
}

#[test]
fn ctrl_c_quits_even_while_typing() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('2'))).unwrap();
    app.handle_key(key(KeyCode::Char('/'))).unwrap();
    assert!(app.app_state.is_typing());

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.handle_key(ctrl_c).unwrap());
}

#[test]
fn unbound_key_is_ignored() {
    let mut app = app();
    assert!(!app.handle_key(key(KeyCode::Char('z'))).unwrap());
    assert_eq!(app.app_state.page(), Page::Dashboard);
}

#[test]
fn number_keys_switch_pages() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('3'))).unwrap();
    assert_eq!(app.app_state.page(), Page::Precedents);

    app.handle_key(key(KeyCode::Tab)).unwrap();
    assert_eq!(app.app_state.page(), Page::Profile);
}

#[test]
fn typed_query_narrows_the_list_live() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('3'))).unwrap();
    app.handle_key(key(KeyCode::Char('/'))).unwrap();

    type_text(&mut app, "california");
    assert_eq!(app.app_state.precedents.visible_len(), 2);

    app.handle_key(key(KeyCode::Enter)).unwrap();
    assert_eq!(
        app.app_state.search(),
        Some(&SearchState::Active {
            query: "california".to_string()
        })
    );
    assert_eq!(app.app_state.precedents.visible_len(), 2);
}

#[test]
fn q_is_text_while_typing() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('2'))).unwrap();
    app.handle_key(key(KeyCode::Char('/'))).unwrap();

    assert!(!app.handle_key(key(KeyCode::Char('q'))).unwrap());
    assert_eq!(app.app_state.search().map(SearchState::query_text), Some("q"));
}

#[test]
fn backspace_widens_the_list_again() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('3'))).unwrap();
    app.handle_key(key(KeyCode::Char('/'))).unwrap();
    type_text(&mut app, "californiax");
    assert_eq!(app.app_state.precedents.visible_len(), 0);

    app.handle_key(key(KeyCode::Backspace)).unwrap();
    assert_eq!(app.app_state.precedents.visible_len(), 2);
}

#[test]
fn escape_clears_search_and_restores_list() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('3'))).unwrap();
    let total = app.app_state.precedents.total_len();

    app.handle_key(key(KeyCode::Char('/'))).unwrap();
    type_text(&mut app, "california");
    app.handle_key(key(KeyCode::Enter)).unwrap();

    // Esc outside the search bar drops the committed query
    app.handle_key(key(KeyCode::Esc)).unwrap();
    assert_eq!(app.app_state.search(), Some(&SearchState::Inactive));
    assert_eq!(app.app_state.precedents.visible_len(), total);
}

#[test]
fn arrow_keys_move_selection_while_typing() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('2'))).unwrap();
    app.handle_key(key(KeyCode::Char('/'))).unwrap();

    app.handle_key(key(KeyCode::Down)).unwrap();
    assert_eq!(app.app_state.cases.selected_index(), Some(1));
    assert!(app.app_state.is_typing());
}

#[test]
fn help_blocks_other_actions() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('?'))).unwrap();
    assert!(app.app_state.help_visible);

    app.handle_key(key(KeyCode::Char('2'))).unwrap();
    assert_eq!(app.app_state.page(), Page::Dashboard);

    app.handle_key(key(KeyCode::Esc)).unwrap();
    assert!(!app.app_state.help_visible);

    app.handle_key(key(KeyCode::Char('2'))).unwrap();
    assert_eq!(app.app_state.page(), Page::Cases);
}

#[test]
fn quit_still_works_with_help_open() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('?'))).unwrap();
    assert!(app.handle_key(key(KeyCode::Char('q'))).unwrap());
}

#[test]
fn poll_timeout_waits_for_next_caption_tick() {
    let app = app();
    // Dashboard greeting types at 30ms per character
    assert!(app.poll_timeout() <= Duration::from_millis(30));
}

#[test]
fn poll_timeout_idles_once_caption_is_complete() {
    let mut app = app();
    app.app_state.captions.advance_to(Duration::from_secs(60));
    assert_eq!(app.poll_timeout(), Duration::from_millis(IDLE_POLL_MS));
}

#[test]
fn draw_renders_current_page() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('2'))).unwrap();
    app.draw().unwrap();

    let text = screen(&app);
    assert!(text.contains("Case Management"));
    assert!(text.contains("Showing 6 of 6 cases"));
}

#[test]
fn caption_mounted_after_idle_gap_starts_from_current_time() {
    let mut app = app();
    // Two idle seconds with no tick fired in between
    app.started = Instant::now().checked_sub(Duration::from_secs(2)).unwrap();

    assert!(!app.process_key(key(KeyCode::Char('2'))).unwrap());

    let deadline = app.app_state.captions.next_deadline().unwrap();
    assert!(
        deadline >= Duration::from_secs(2) + Duration::from_millis(70),
        "first tick scheduled from a stale clock: {deadline:?}"
    );
    assert!(app.app_state.captions.caption(Page::Cases).unwrap().revealed_length() <= 1);
}
