//! Search input widget for rendering the search bar.

use super::styles::Theme;
use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
///
/// Renders the search bar of a list page in all three states: a placeholder
/// when inactive, an editable line with a cursor while typing and the
/// committed query when active.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    placeholder: &'a str,
    theme: Theme,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, placeholder: &'a str, theme: Theme) -> Self {
        Self {
            search_state,
            placeholder,
            theme,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, title) = match self.search_state {
            SearchState::Typing { query, cursor } => {
                // Split query into before/after cursor for rendering cursor
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
                let after_text: String = after.collect();

                let spans = vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                    ),
                    Span::raw(after_text),
                ];
                (Line::from(spans), " Search ")
            }
            SearchState::Active { query } => (Line::from(query.as_str()), " Search (/ to edit) "),
            SearchState::Inactive => (
                Line::from(Span::styled(self.placeholder, self.theme.muted())),
                " Search (/) ",
            ),
        };

        let border_style = if self.search_state.is_typing() {
            self.theme.accent()
        } else {
            self.theme.muted()
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &SearchState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| {
                let widget = SearchInput::new(
                    state,
                    "Search cases...",
                    Theme::new(ColorConfig::with_colors(false)),
                );
                frame.render_widget(widget, frame.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn search_input_renders_typing_state() {
        let state = SearchState::Typing {
            query: "test".to_string(),
            cursor: 2,
        };
        let text = render(&state);
        assert!(text.contains("test"));
        assert!(text.contains(" Search "));
    }

    #[test]
    fn search_input_cursor_at_end_of_multibyte_query() {
        let state = SearchState::Typing {
            query: "café".to_string(),
            cursor: 4,
        };
        let text = render(&state);
        assert!(text.contains("café"));
    }

    #[test]
    fn search_input_renders_active_state() {
        let state = SearchState::Active {
            query: "active query".to_string(),
        };
        let text = render(&state);
        assert!(text.contains("active query"));
        assert!(text.contains("/ to edit"));
    }

    #[test]
    fn search_input_inactive_shows_placeholder() {
        let text = render(&SearchState::Inactive);
        assert!(text.contains("Search cases..."));
    }
}
