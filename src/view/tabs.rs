//! Page tab bar widget.
//!
//! Displays one tab per page using ratatui's Tabs widget, numbered by the
//! key that jumps to it.

use super::styles::Theme;
use crate::model::Page;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the page tab bar with `current` highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, current: Page, theme: Theme) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(index, page)| Line::from(format!("{} {}", index + 1, page.title())))
        .collect();

    let selected = Page::ALL
        .iter()
        .position(|&page| page == current)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" LexDash "))
        .highlight_style(theme.accent().patch(theme.highlight()))
        .select(selected);

    frame.render_widget(tabs, area);
}
