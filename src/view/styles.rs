//! Styling for the dashboard.
//!
//! Status, priority, outcome and score-band colors follow the product's
//! palette. With colors disabled every style falls back to plain text, except
//! the highlight which uses reverse video so selection stays visible.

use crate::model::{CaseStatus, Outcome, Priority, RelevanceBand, StrengthBand};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced on or off, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Style lookup for every colored element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colors: ColorConfig,
}

impl Theme {
    /// Theme honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Page and section headings.
    pub fn heading(self) -> Style {
        self.fg(Color::Magenta).add_modifier(Modifier::BOLD)
    }

    /// Secondary text: labels, counts, hints.
    pub fn muted(self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Keyboard keys in hints and the help overlay.
    pub fn key(self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Selected filter chip, current tab.
    pub fn accent(self) -> Style {
        self.fg(Color::Magenta).add_modifier(Modifier::BOLD)
    }

    /// Highlighted list row.
    pub fn highlight(self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Case strength score.
    pub fn strength(self, band: StrengthBand) -> Style {
        match band {
            StrengthBand::Strong => self.fg(Color::Green),
            StrengthBand::Moderate => self.fg(Color::Yellow),
            StrengthBand::Weak => self.fg(Color::Red),
        }
    }

    /// Precedent relevance score.
    pub fn relevance(self, band: RelevanceBand) -> Style {
        match band {
            RelevanceBand::High => self.fg(Color::Green),
            RelevanceBand::Medium => self.fg(Color::Yellow),
            RelevanceBand::Low => self.fg(Color::Red),
        }
    }

    /// Case status badge.
    pub fn status(self, status: CaseStatus) -> Style {
        match status {
            CaseStatus::Active => self.fg(Color::Green),
            CaseStatus::Pending => self.fg(Color::Yellow),
            CaseStatus::OnHold => self.fg(Color::Gray),
            CaseStatus::Closed => self.fg(Color::Blue),
        }
    }

    /// Case priority.
    pub fn priority(self, priority: Priority) -> Style {
        match priority {
            Priority::High => self.fg(Color::Red),
            Priority::Medium => self.fg(Color::Yellow),
            Priority::Low => self.fg(Color::Green),
        }
    }

    /// Precedent outcome badge.
    pub fn outcome(self, outcome: Outcome) -> Style {
        match outcome {
            Outcome::Favorable => self.fg(Color::Green),
            Outcome::Unfavorable => self.fg(Color::Red),
            Outcome::Neutral => self.fg(Color::Gray),
        }
    }
}

// ===== Tests =====
