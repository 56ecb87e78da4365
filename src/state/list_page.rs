//! State of one searchable, filterable, sortable list page.
//!
//! ListPage owns the full record set, the query engine for it and the current
//! [`QuerySelection`]. Every change to the selection re-runs the engine and
//! stores the result as positions into the record set.

use crate::model::{FilterId, QueryError, SortId};
use crate::query::{QueryEngine, QuerySelection, Record};
use crate::state::search_input_handler;
use crate::state::SearchState;
use tracing::debug;

// ===== ListPage =====

/// One list page: records, selections and the visible result.
#[derive(Debug)]
pub struct ListPage<R: Record> {
    /// Every record, in source order. Never mutated.
    records: Vec<R>,

    engine: QueryEngine<R>,

    /// Current UI selections fed to the engine.
    selection: QuerySelection,

    /// Search bar state. Its query text mirrors `selection.query_text`.
    search: SearchState,

    /// Result of the last query, as positions into `records`.
    visible: Vec<usize>,

    /// Index into `visible` of the highlighted row. Meaningless when
    /// `visible` is empty.
    selected: usize,
}

impl<R: Record> ListPage<R> {
    /// Build a page showing every record, sorted by `sort_id` or, when
    /// `None`, by the engine's first registered sort.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownSort`] when `sort_id` is not registered, or when
    /// no sort is registered at all.
    pub fn new(
        records: Vec<R>,
        engine: QueryEngine<R>,
        sort_id: Option<&str>,
    ) -> Result<Self, QueryError> {
        let sort_id = match sort_id {
            Some(id) => engine.sorts().resolve(id)?.id().clone(),
            None => engine
                .sorts()
                .default_sort()
                .map(|spec| spec.id().clone())
                .ok_or_else(|| QueryError::UnknownSort { id: String::new() })?,
        };

        let mut page = Self {
            records,
            engine,
            selection: QuerySelection::new(sort_id),
            search: SearchState::Inactive,
            visible: Vec::new(),
            selected: 0,
        };
        page.refresh()?;
        Ok(page)
    }

    /// Re-run the query for the current selection.
    ///
    /// Keeps the highlighted record when it is still visible, otherwise
    /// moves the highlight to the first row.
    pub fn refresh(&mut self) -> Result<(), QueryError> {
        let previous = self.selected_record().map(|record| record.id().clone());

        self.visible = self.engine.run_indices(&self.records, &self.selection)?;

        self.selected = previous
            .and_then(|id| {
                self.visible
                    .iter()
                    .position(|&index| self.records[index].id() == &id)
            })
            .unwrap_or(0);

        debug!(
            query = %self.selection.query_text,
            filter = %self.selection.filter_id.as_str(),
            sort = %self.selection.sort_id.as_str(),
            visible = self.visible.len(),
            total = self.records.len(),
            "List query recomputed"
        );
        Ok(())
    }

    // ===== Selections =====

    /// Current selections.
    pub fn selection(&self) -> &QuerySelection {
        &self.selection
    }

    /// Search bar state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Apply a search bar transition, re-running the query when the text changed.
    pub fn update_search(
        &mut self,
        transition: impl FnOnce(SearchState) -> SearchState,
    ) -> Result<(), QueryError> {
        let current = std::mem::take(&mut self.search);
        self.search = transition(current);

        if self.search.query_text() != self.selection.query_text {
            self.selection.query_text = self.search.query_text().to_string();
            self.refresh()?;
        }
        Ok(())
    }

    /// Replace the query with committed text, as if typed and submitted.
    pub fn set_query_text(&mut self, text: &str) -> Result<(), QueryError> {
        let text = text.to_string();
        self.update_search(|_| {
            search_input_handler::submit_search(SearchState::Typing { query: text, cursor: 0 })
        })
    }

    /// Select a filter by id.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownFilter`]; the selection is left unchanged.
    pub fn set_filter(&mut self, filter_id: &str) -> Result<(), QueryError> {
        let id = self.engine.filters().resolve(filter_id)?.id().clone();
        self.selection.filter_id = id;
        self.refresh()
    }

    /// Select a sort by id.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownSort`]; the selection is left unchanged.
    pub fn set_sort(&mut self, sort_id: &str) -> Result<(), QueryError> {
        let id = self.engine.sorts().resolve(sort_id)?.id().clone();
        self.selection.sort_id = id;
        self.refresh()
    }

    /// Move to the next (or previous) registered filter, wrapping around.
    pub fn cycle_filter(&mut self, forward: bool) -> Result<(), QueryError> {
        let specs = self.engine.filters().specs();
        let current = self
            .engine
            .filters()
            .position(self.selection.filter_id.as_str())
            .unwrap_or(0);
        let next: FilterId = specs[cycle(current, specs.len(), forward)].id().clone();
        self.selection.filter_id = next;
        self.refresh()
    }

    /// Move to the next (or previous) registered sort, wrapping around.
    pub fn cycle_sort(&mut self, forward: bool) -> Result<(), QueryError> {
        let specs = self.engine.sorts().specs();
        let current = self
            .engine
            .sorts()
            .position(self.selection.sort_id.as_str())
            .unwrap_or(0);
        let next: SortId = specs[cycle(current, specs.len(), forward)].id().clone();
        self.selection.sort_id = next;
        self.refresh()
    }

    /// Label of the selected filter.
    pub fn filter_label(&self) -> &str {
        self.engine
            .filters()
            .resolve(self.selection.filter_id.as_str())
            .map_or("", |spec| spec.label())
    }

    /// Label of the selected sort.
    pub fn sort_label(&self) -> &str {
        self.engine
            .sorts()
            .resolve(self.selection.sort_id.as_str())
            .map_or("", |spec| spec.label())
    }

    /// The engine, for listing filters and sorts.
    pub fn engine(&self) -> &QueryEngine<R> {
        &self.engine
    }

    // ===== Result =====

    /// Every record, in source order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Visible records in display order.
    pub fn visible(&self) -> impl Iterator<Item = &R> + '_ {
        self.visible.iter().map(|&index| &self.records[index])
    }

    /// Number of visible records.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Number of records before search and filter.
    pub fn total_len(&self) -> usize {
        self.records.len()
    }

    /// Highlighted row, as an index into the visible records.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.visible.is_empty()).then_some(self.selected)
    }

    /// Highlighted record.
    pub fn selected_record(&self) -> Option<&R> {
        self.visible
            .get(self.selected)
            .map(|&index| &self.records[index])
    }

    /// Highlight the next row. Saturates at the last row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    /// Highlight the previous row. Saturates at the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// Wrapping step through `len` positions.
fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
#[path = "list_page_tests.rs"]
mod tests;
