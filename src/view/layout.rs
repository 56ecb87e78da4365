//! Screen layout rendering.
//!
//! Tab bar on top, page header (title and typing caption), the page body,
//! and a one-line status bar at the bottom. The help overlay is drawn last,
//! over everything else.

use super::caption::Caption;
use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use super::dashboard::{self, GREETING};
use super::styles::Theme;
use super::{cases, help, precedents, profile, tabs};
use crate::model::Page;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: Theme) {
    let [tab_area, header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(TAB_BAR_HEIGHT),
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    tabs::render_tab_bar(frame, tab_area, state.page(), theme);
    render_header(frame, header_area, state, theme);

    match state.page() {
        Page::Dashboard => dashboard::render_dashboard(frame, body_area, state, theme),
        Page::Cases => cases::render_cases(frame, body_area, &state.cases, theme),
        Page::Precedents => precedents::render_precedents(frame, body_area, &state.precedents, theme),
        Page::Profile => profile::render_profile(frame, body_area, state.profile_section(), theme),
    }

    render_status_bar(frame, status_area, state, theme);

    if state.help_visible {
        help::render_help_overlay(frame, theme);
    }
}

/// Page title and the page's typing caption.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let [title_area, caption_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let title = match state.page() {
        Page::Dashboard => GREETING,
        page => page.title(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title, theme.heading()))),
        title_area,
    );
    frame.render_widget(
        Caption::new(state.captions.caption(state.page()), theme.muted()),
        caption_area,
    );
}

/// Keyboard hints for the current mode.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let hints: &[(&str, &str)] = if state.is_typing() {
        &[("Enter", "keep query"), ("Esc", "clear"), ("←/→", "move cursor")]
    } else {
        match state.page() {
            Page::Cases | Page::Precedents => &[
                ("/", "search"),
                ("f", "filter"),
                ("o", "sort"),
                ("j/k", "move"),
                ("Tab", "next page"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Page::Profile => &[("j/k", "section"), ("Tab", "next page"), ("?", "help"), ("q", "quit")],
            Page::Dashboard => &[("1-4", "pages"), ("Tab", "next page"), ("?", "help"), ("q", "quit")],
        }
    };

    let mut spans = Vec::new();
    for (key, description) in hints {
        spans.push(Span::styled(format!(" {key}"), theme.key()));
        spans.push(Span::styled(format!(" {description} "), theme.muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
