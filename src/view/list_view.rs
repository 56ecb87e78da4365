//! Chrome shared by the list pages: search bar, filter chips, sort label,
//! result count and the empty state.

use super::constants::{CONTROLS_HEIGHT, LIST_WIDTH_PERCENT, SEARCH_INPUT_HEIGHT};
use super::search_input::SearchInput;
use super::styles::Theme;
use crate::query::Record;
use crate::state::ListPage;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Areas of a list page.
pub struct ListAreas {
    /// Rows.
    pub list: Rect,
    /// Detail of the highlighted row.
    pub detail: Rect,
}

/// Nouns used in the count line and the empty state.
pub struct ListNouns {
    /// Plural noun, e.g. "cases".
    pub plural: &'static str,
    /// Placeholder shown in an empty search bar.
    pub placeholder: &'static str,
}

/// Render the search bar and controls, returning the areas left for the
/// rows and the detail pane.
pub fn render_list_chrome<R: Record>(
    frame: &mut Frame,
    area: Rect,
    page: &ListPage<R>,
    nouns: &ListNouns,
    theme: Theme,
) -> ListAreas {
    let [search_area, controls_area, content_area] = Layout::vertical([
        Constraint::Length(SEARCH_INPUT_HEIGHT),
        Constraint::Length(CONTROLS_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        SearchInput::new(page.search(), nouns.placeholder, theme),
        search_area,
    );
    frame.render_widget(Paragraph::new(controls_lines(page, nouns, theme)), controls_area);

    let [list, detail] = Layout::horizontal([
        Constraint::Percentage(LIST_WIDTH_PERCENT),
        Constraint::Percentage(100 - LIST_WIDTH_PERCENT),
    ])
    .areas(content_area);

    ListAreas { list, detail }
}

/// Filter chips with the sort label, then "Showing N of M".
fn controls_lines<R: Record>(page: &ListPage<R>, nouns: &ListNouns, theme: Theme) -> Vec<Line<'static>> {
    let selected_filter = page.selection().filter_id.as_str();

    let mut chips = Vec::new();
    for spec in page.engine().filters().specs() {
        let label = format!(" {} ", spec.label());
        if spec.id().as_str() == selected_filter {
            chips.push(Span::styled(label, theme.accent().patch(theme.highlight())));
        } else {
            chips.push(Span::styled(label, theme.muted()));
        }
        chips.push(Span::raw(" "));
    }
    chips.push(Span::styled("Sort: ", theme.muted()));
    chips.push(Span::styled(page.sort_label().to_string(), theme.accent()));

    let count = Line::from(Span::styled(
        format!(
            "Showing {} of {} {}",
            page.visible_len(),
            page.total_len(),
            nouns.plural
        ),
        theme.muted(),
    ));

    vec![Line::from(chips), count]
}

/// Explicit empty state for a query with no results.
pub fn render_empty_state(frame: &mut Frame, area: Rect, nouns: &ListNouns, theme: Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("No {} found", nouns.plural), theme.heading())),
        Line::from(Span::styled(
            "Try adjusting your search or filter criteria",
            theme.muted(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
