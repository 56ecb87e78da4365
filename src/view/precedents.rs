//! Precedent research page.

use super::helpers::{empty_line, format_score, key_value_line};
use super::list_view::{render_empty_state, render_list_chrome, ListNouns};
use super::styles::Theme;
use crate::model::Precedent;
use crate::state::ListPage;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const NOUNS: ListNouns = ListNouns {
    plural: "precedents",
    placeholder: "Search precedents, courts, or case types...",
};

/// Render the precedents page into `area`.
pub fn render_precedents(frame: &mut Frame, area: Rect, page: &ListPage<Precedent>, theme: Theme) {
    let areas = render_list_chrome(frame, area, page, &NOUNS, theme);

    if page.visible_len() == 0 {
        render_empty_state(frame, areas.list, &NOUNS, theme);
        return;
    }

    let items: Vec<ListItem> = page
        .visible()
        .map(|precedent| precedent_item(precedent, theme))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Precedents "))
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(page.selected_index());
    frame.render_stateful_widget(list, areas.list, &mut list_state);

    if let Some(precedent) = page.selected_record() {
        frame.render_widget(
            Paragraph::new(precedent_detail(precedent, theme))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" Details ")),
            areas.detail,
        );
    }
}

fn precedent_item(precedent: &Precedent, theme: Theme) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(precedent.case_name.clone(), theme.heading())),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(precedent.year.to_string(), theme.muted()),
            Span::styled(" · ", theme.muted()),
            Span::styled(precedent.outcome.label(), theme.outcome(precedent.outcome)),
            Span::styled(" · ", theme.muted()),
            Span::styled(
                format_score(precedent.relevance_score),
                theme.relevance(precedent.relevance_band()),
            ),
        ]),
    ])
}

/// Detail pane lines for one precedent.
pub fn precedent_detail(precedent: &Precedent, theme: Theme) -> Vec<Line<'static>> {
    let label = theme.muted();

    let mut lines = vec![
        Line::from(Span::styled(precedent.case_name.clone(), theme.heading())),
        Line::from(Span::styled(precedent.citation.clone(), label)),
        empty_line(),
        key_value_line("Court", precedent.court.clone(), label),
        key_value_line("Year", precedent.year.to_string(), label),
        key_value_line("Jurisdiction", precedent.jurisdiction.clone(), label),
        key_value_line("Case type", precedent.case_type.clone(), label),
        Line::from(vec![
            Span::styled("Outcome: ", label),
            Span::styled(precedent.outcome.label(), theme.outcome(precedent.outcome)),
            Span::styled("  Relevance: ", label),
            Span::styled(
                format_score(precedent.relevance_score),
                theme.relevance(precedent.relevance_band()),
            ),
        ]),
        empty_line(),
        Line::from(precedent.summary.clone()),
        empty_line(),
        Line::from(Span::styled("Key points", theme.heading())),
    ];
    lines.extend(
        precedent
            .key_points
            .iter()
            .map(|point| Line::from(format!("• {point}"))),
    );
    lines.push(empty_line());
    lines.push(key_value_line(
        "Applicable to",
        precedent.applicable_to_case.clone(),
        label,
    ));
    lines.push(key_value_line("Found", precedent.date_found.clone(), label));
    lines
}
