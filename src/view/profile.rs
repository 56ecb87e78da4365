//! Legal profile intake page.

use super::styles::Theme;
use crate::model::PROFILE_SECTIONS;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the profile page with section `active` highlighted.
pub fn render_profile(frame: &mut Frame, area: Rect, active: usize, theme: Theme) {
    let [steps_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    let items: Vec<ListItem> = PROFILE_SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| ListItem::new(format!("{}. {}", index + 1, section.title)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Sections "))
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(active));
    frame.render_stateful_widget(list, steps_area, &mut list_state);

    let Some(section) = PROFILE_SECTIONS.get(active) else {
        return;
    };
    let lines = vec![
        Line::from(Span::styled(
            format!("Step {} of {}", active + 1, PROFILE_SECTIONS.len()),
            theme.muted(),
        )),
        Line::from(Span::styled(section.title, theme.heading())),
        Line::from(section.description),
        Line::from(""),
        Line::from(Span::styled(
            "j/k or ↓/↑ to move between sections",
            theme.muted(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        detail_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(active: usize) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal
            .draw(|frame| {
                render_profile(
                    frame,
                    frame.area(),
                    active,
                    Theme::new(ColorConfig::with_colors(false)),
                )
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
    fn lists_all_sections() {
        let text = render(0);
        for section in PROFILE_SECTIONS {
            assert!(text.contains(section.title), "missing {}", section.title);
        }
    }

    #[test]
    fn shows_active_section_detail() {
        let text = render(2);
        assert!(text.contains("> 3. Practice Areas"));
        assert!(text.contains("Step 3 of 6"));
        assert!(text.contains("Your legal specialties and practice areas"));
    }
}
