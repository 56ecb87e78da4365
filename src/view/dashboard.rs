//! Dashboard page: case research analytics and precedent findings.

use super::helpers::format_score;
use super::styles::Theme;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Heading shown above the dashboard caption.
pub const GREETING: &str = "Welcome back, User";

/// Render the dashboard body into `area`.
pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let [analytics_area, findings_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    frame.render_widget(
        Paragraph::new(analytics_lines(state, theme))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Case Research Analytics "),
            ),
        analytics_area,
    );
    frame.render_widget(
        Paragraph::new(findings_lines(state, theme))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Precedent Findings "),
            ),
        findings_area,
    );
}

fn analytics_lines(state: &AppState, theme: Theme) -> Vec<Line<'static>> {
    state
        .dashboard_cases()
        .flat_map(|case| {
            let band = case.strength_band();
            [
                Line::from(vec![
                    Span::styled(case.case_name.clone(), theme.heading()),
                    Span::raw("  "),
                    Span::styled(
                        format!("{} {}", band.label(), format_score(case.strength_score)),
                        theme.strength(band),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} precedents found · {} vulnerabilities",
                        case.precedents_found, case.vulnerabilities
                    ),
                    theme.muted(),
                )),
            ]
        })
        .collect()
}

fn findings_lines(state: &AppState, theme: Theme) -> Vec<Line<'static>> {
    state
        .dashboard_findings()
        .flat_map(|precedent| {
            [
                Line::from(vec![
                    Span::styled(precedent.case_name.clone(), theme.heading()),
                    Span::raw("  "),
                    Span::styled(
                        format_score(precedent.relevance_score),
                        theme.relevance(precedent.relevance_band()),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} · applies to {}",
                        precedent.court, precedent.applicable_to_case
                    ),
                    theme.muted(),
                )),
            ]
        })
        .collect()
}
