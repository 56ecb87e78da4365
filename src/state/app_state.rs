//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! Key actions are applied through methods that keep the list results and the
//! mounted captions consistent with the current page and selections.

use crate::model::{
    AppError, FilterId, KeyAction, LegalCase, Page, Precedent, QueryError, PROFILE_SECTIONS,
};
use crate::query::catalog::{self, case_engine, precedent_engine};
use crate::reveal::RevealSpeed;
use crate::source::DataSet;
use crate::state::search_input_handler::activate_search_input;
use crate::state::{CaptionBoard, ListPage, SearchState};
use tracing::info;

/// Number of cases in the dashboard analytics widget.
pub const DASHBOARD_CASES: usize = 3;

/// Number of precedents in the dashboard findings widget.
pub const DASHBOARD_FINDINGS: usize = 3;

// ===== AppOptions =====

/// Startup choices resolved from config, environment and command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// Page shown first.
    pub start_page: Page,
    /// Query committed on the start page, if it is a list page.
    pub initial_search: Option<String>,
    /// Sort id for the cases page. `None` uses the first registered sort.
    pub cases_sort: Option<String>,
    /// Sort id for the precedents page. `None` uses the first registered sort.
    pub precedents_sort: Option<String>,
    /// Typing speed of page header captions.
    pub caption_speed: RevealSpeed,
    /// Typing speed of the dashboard greeting.
    pub greeting_speed: RevealSpeed,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            start_page: Page::default(),
            initial_search: None,
            cases_sort: None,
            precedents_sort: None,
            caption_speed: RevealSpeed::CAPTION,
            greeting_speed: RevealSpeed::GREETING,
        }
    }
}

// ===== AppState =====

/// Application state. Pure data plus the caption timers.
///
/// # State Transitions
///
/// - Page: any → any (via `switch_page`); the old page's caption is torn
///   down and the new page's caption starts typing from nothing
/// - Search (per list page): Inactive → Typing → Active → Inactive
/// - Profile section: 0 ⇄ 5, clamped at both ends
#[derive(Debug)]
pub struct AppState {
    /// Page currently shown.
    page: Page,

    /// Case management list.
    pub cases: ListPage<LegalCase>,

    /// Precedent research list.
    pub precedents: ListPage<Precedent>,

    /// Index into [`PROFILE_SECTIONS`] of the highlighted intake section.
    profile_section: usize,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Header captions. Only the current page's caption is mounted.
    pub captions: CaptionBoard,

    options: AppOptions,

    /// Positions into the precedent records, best relevance first.
    findings: Vec<usize>,
}

impl AppState {
    /// Build the state for `data`, mounting the start page's caption.
    ///
    /// # Errors
    ///
    /// Fails fast when the catalog cannot be registered or a configured sort
    /// id is unknown.
    pub fn new(data: DataSet, options: AppOptions) -> Result<Self, AppError> {
        let precedent_engine = precedent_engine()?;
        let mut findings = precedent_engine.query_indices(
            &data.precedents,
            "",
            FilterId::ALL,
            catalog::PRECEDENT_SORT_RELEVANCE,
        )?;
        findings.truncate(DASHBOARD_FINDINGS);

        let cases = ListPage::new(data.cases, case_engine()?, options.cases_sort.as_deref())?;
        let precedents = ListPage::new(
            data.precedents,
            precedent_engine,
            options.precedents_sort.as_deref(),
        )?;

        let mut state = Self {
            page: options.start_page,
            cases,
            precedents,
            profile_section: 0,
            help_visible: false,
            captions: CaptionBoard::new(),
            options,
            findings,
        };

        if let Some(query) = state.options.initial_search.clone() {
            match state.page {
                Page::Cases => state.cases.set_query_text(&query)?,
                Page::Precedents => state.precedents.set_query_text(&query)?,
                Page::Dashboard | Page::Profile => {}
            }
        }

        state.mount_caption();
        info!(
            page = state.page.slug(),
            cases = state.cases.total_len(),
            precedents = state.precedents.total_len(),
            "Application state ready"
        );
        Ok(state)
    }

    /// Page currently shown.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Startup options in effect.
    pub fn options(&self) -> &AppOptions {
        &self.options
    }

    /// Typing speed used for `page`'s caption.
    pub fn caption_speed(&self, page: Page) -> RevealSpeed {
        match page {
            Page::Dashboard => self.options.greeting_speed,
            Page::Cases | Page::Precedents | Page::Profile => self.options.caption_speed,
        }
    }

    fn mount_caption(&mut self) {
        let speed = self.caption_speed(self.page);
        self.captions.mount(self.page, self.page.caption(), speed);
    }

    /// Show `page`.
    ///
    /// Switching to the page already shown is a no-op.
    pub fn switch_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.captions.unmount(self.page);
        self.page = page;
        self.mount_caption();
        info!(page = page.slug(), "Page switched");
    }

    // ===== Search =====

    /// Search bar of the current page, if it is a list page.
    pub fn search(&self) -> Option<&SearchState> {
        match self.page {
            Page::Cases => Some(self.cases.search()),
            Page::Precedents => Some(self.precedents.search()),
            Page::Dashboard | Page::Profile => None,
        }
    }

    /// Whether keystrokes go to the search bar.
    pub fn is_typing(&self) -> bool {
        self.search().is_some_and(SearchState::is_typing)
    }

    /// Apply a search bar transition on the current list page.
    ///
    /// No-op on pages without a list.
    pub fn update_search(
        &mut self,
        transition: impl FnOnce(SearchState) -> SearchState,
    ) -> Result<(), QueryError> {
        match self.page {
            Page::Cases => self.cases.update_search(transition),
            Page::Precedents => self.precedents.update_search(transition),
            Page::Dashboard | Page::Profile => Ok(()),
        }
    }

    // ===== Profile =====

    /// Highlighted profile section index.
    pub fn profile_section(&self) -> usize {
        self.profile_section
    }

    // ===== Dashboard =====

    /// Cases shown in the dashboard analytics widget.
    pub fn dashboard_cases(&self) -> impl Iterator<Item = &LegalCase> + '_ {
        self.cases.records().iter().take(DASHBOARD_CASES)
    }

    /// Most relevant precedents, best first.
    pub fn dashboard_findings(&self) -> impl Iterator<Item = &Precedent> + '_ {
        let records = self.precedents.records();
        self.findings.iter().map(move |&index| &records[index])
    }

    // ===== Actions =====

    /// Apply a navigation action.
    ///
    /// `Quit` is left to the caller. List actions on a page without a list
    /// are ignored.
    pub fn apply(&mut self, action: KeyAction) -> Result<(), QueryError> {
        match action {
            KeyAction::GoToPage(page) => self.switch_page(page),
            KeyAction::NextPage => self.switch_page(self.page.next()),
            KeyAction::PrevPage => self.switch_page(self.page.prev()),
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => {}
            KeyAction::StartSearch => self.update_search(activate_search_input)?,
            KeyAction::SelectNext => match self.page {
                Page::Cases => self.cases.select_next(),
                Page::Precedents => self.precedents.select_next(),
                Page::Profile => {
                    self.profile_section =
                        (self.profile_section + 1).min(PROFILE_SECTIONS.len() - 1);
                }
                Page::Dashboard => {}
            },
            KeyAction::SelectPrev => match self.page {
                Page::Cases => self.cases.select_prev(),
                Page::Precedents => self.precedents.select_prev(),
                Page::Profile => self.profile_section = self.profile_section.saturating_sub(1),
                Page::Dashboard => {}
            },
            KeyAction::NextFilter => self.cycle_filter(true)?,
            KeyAction::PrevFilter => self.cycle_filter(false)?,
            KeyAction::NextSort => self.cycle_sort(true)?,
            KeyAction::PrevSort => self.cycle_sort(false)?,
        }
        Ok(())
    }

    fn cycle_filter(&mut self, forward: bool) -> Result<(), QueryError> {
        match self.page {
            Page::Cases => self.cases.cycle_filter(forward),
            Page::Precedents => self.precedents.cycle_filter(forward),
            Page::Dashboard | Page::Profile => Ok(()),
        }
    }

    fn cycle_sort(&mut self, forward: bool) -> Result<(), QueryError> {
        match self.page {
            Page::Cases => self.cases.cycle_sort(forward),
            Page::Precedents => self.precedents.cycle_sort(forward),
            Page::Dashboard | Page::Profile => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
