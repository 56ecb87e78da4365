//! Case management page.

use super::helpers::{empty_line, format_date, format_score, key_value_line};
use super::list_view::{render_empty_state, render_list_chrome, ListNouns};
use super::styles::Theme;
use crate::model::LegalCase;
use crate::state::ListPage;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const NOUNS: ListNouns = ListNouns {
    plural: "cases",
    placeholder: "Search cases, clients, or case types...",
};

/// Legal areas shown before collapsing the rest into "+N more".
const VISIBLE_LEGAL_AREAS: usize = 2;

/// Render the cases page into `area`.
pub fn render_cases(frame: &mut Frame, area: Rect, page: &ListPage<LegalCase>, theme: Theme) {
    let areas = render_list_chrome(frame, area, page, &NOUNS, theme);

    if page.visible_len() == 0 {
        render_empty_state(frame, areas.list, &NOUNS, theme);
        return;
    }

    let items: Vec<ListItem> = page.visible().map(|case| case_item(case, theme)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Cases "))
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(page.selected_index());
    frame.render_stateful_widget(list, areas.list, &mut list_state);

    if let Some(case) = page.selected_record() {
        frame.render_widget(
            Paragraph::new(case_detail(case, theme))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" Details ")),
            areas.detail,
        );
    }
}

fn case_item(case: &LegalCase, theme: Theme) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(case.case_name.clone(), theme.heading())),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(case.status.label(), theme.status(case.status)),
            Span::styled(" · ", theme.muted()),
            Span::styled(
                format!("{} priority", case.priority),
                theme.priority(case.priority),
            ),
            Span::styled(" · ", theme.muted()),
            Span::styled(
                format_score(case.strength_score),
                theme.strength(case.strength_band()),
            ),
        ]),
    ])
}

/// Detail pane lines for one case.
pub fn case_detail(case: &LegalCase, theme: Theme) -> Vec<Line<'static>> {
    let label = theme.muted();
    let band = case.strength_band();

    let mut areas: Vec<String> = case
        .legal_areas
        .iter()
        .take(VISIBLE_LEGAL_AREAS)
        .cloned()
        .collect();
    if case.legal_areas.len() > VISIBLE_LEGAL_AREAS {
        areas.push(format!("+{} more", case.legal_areas.len() - VISIBLE_LEGAL_AREAS));
    }

    vec![
        Line::from(Span::styled(case.case_name.clone(), theme.heading())),
        Line::from(Span::styled(case.case_type.clone(), label)),
        empty_line(),
        key_value_line("Client", case.client.clone(), label),
        key_value_line("Court", case.court.clone(), label),
        key_value_line("Filed", format_date(case.filing_date), label),
        key_value_line("Due", format_date(case.next_deadline), label),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(case.status.label(), theme.status(case.status)),
            Span::styled("  Priority: ", label),
            Span::styled(case.priority.label(), theme.priority(case.priority)),
        ]),
        empty_line(),
        Line::from(vec![
            Span::styled("Strength: ", label),
            Span::styled(
                format!("{} ({})", format_score(case.strength_score), band.label()),
                theme.strength(band),
            ),
        ]),
        key_value_line("Precedents", case.precedents_found.to_string(), label),
        key_value_line("Issues", case.vulnerabilities.to_string(), label),
        key_value_line("Legal areas", areas.join(", "), label),
        empty_line(),
        Line::from(case.description.clone()),
    ]
}
