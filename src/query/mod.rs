//! List query engine (pure).
//!
//! Computes the visible, ordered subset of an in-memory record list for the
//! current UI selections: free-text search, a named filter and a named sort.
//!
//! The pipeline is a pure function of its inputs and the two registries:
//!
//! 1. Resolve `filter_id` and `sort_id` (unknown ids fail fast, even for an empty list)
//! 2. Keep records whose searchable fields contain the query text, case-insensitively,
//!    AND that satisfy the filter predicate
//! 3. Stable-sort the survivors with the comparator
//!
//! The query text is matched literally after lower-casing. No trimming, no
//! tokenization, no fuzzy matching: a query of `"  "` only matches fields that
//! contain two consecutive spaces.

pub mod catalog;
pub mod registry;

pub use registry::{FilterRegistry, FilterSpec, SortRegistry, SortSpec};

use crate::model::{FilterId, QueryError, SortId};
use std::fmt;
use std::hash::Hash;

// ===== Record =====

/// A list item that can be searched, filtered and sorted.
pub trait Record {
    /// Identity of the record within its list.
    type Id: Eq + Hash + Clone + fmt::Debug;

    /// Unique id.
    fn id(&self) -> &Self::Id;

    /// Fields the free-text search looks at.
    fn searchable_fields(&self) -> impl Iterator<Item = &str>;
}

/// Whether any searchable field of `record` contains `query_text`, ignoring case.
///
/// An empty query matches every record.
pub fn matches_text<R: Record>(record: &R, query_text: &str) -> bool {
    matches_normalized(record, &query_text.to_lowercase())
}

fn matches_normalized<R: Record>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .searchable_fields()
            .any(|field| field.to_lowercase().contains(needle))
}

// ===== QuerySelection =====

/// The UI selections that drive a list page.
///
/// Owned by the presentation layer and passed into [`QueryEngine::run`]
/// whenever any part of it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySelection {
    /// Free-text search, matched literally.
    pub query_text: String,
    /// Selected filter.
    pub filter_id: FilterId,
    /// Selected sort.
    pub sort_id: SortId,
}

impl QuerySelection {
    /// Empty query, `all` filter, the given sort.
    pub fn new(sort_id: SortId) -> Self {
        Self {
            query_text: String::new(),
            filter_id: FilterId::all(),
            sort_id,
        }
    }
}

// ===== QueryEngine =====

/// Filter and sort registries for one record type.
#[derive(Debug)]
pub struct QueryEngine<R> {
    filters: FilterRegistry<R>,
    sorts: SortRegistry<R>,
}

impl<R: Record> QueryEngine<R> {
    /// Bundle registries into an engine.
    pub fn new(filters: FilterRegistry<R>, sorts: SortRegistry<R>) -> Self {
        Self { filters, sorts }
    }

    /// Registered filters.
    pub fn filters(&self) -> &FilterRegistry<R> {
        &self.filters
    }

    /// Registered sorts.
    pub fn sorts(&self) -> &SortRegistry<R> {
        &self.sorts
    }

    /// Compute the visible, ordered subset of `records`.
    ///
    /// Returns references into `records`, which is never mutated. Records the
    /// comparator considers equal keep their relative order from `records`.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownFilter`] / [`QueryError::UnknownSort`] when an id
    /// is not registered. This is checked before any record is examined.
    pub fn query<'a>(
        &self,
        records: &'a [R],
        query_text: &str,
        filter_id: &str,
        sort_id: &str,
    ) -> Result<Vec<&'a R>, QueryError> {
        let indices = self.query_indices(records, query_text, filter_id, sort_id)?;
        Ok(indices.into_iter().map(|i| &records[i]).collect())
    }

    /// Like [`query`](Self::query), but returns positions into `records`.
    ///
    /// Useful when the caller wants to keep the result without borrowing.
    pub fn query_indices(
        &self,
        records: &[R],
        query_text: &str,
        filter_id: &str,
        sort_id: &str,
    ) -> Result<Vec<usize>, QueryError> {
        let filter = self.filters.resolve(filter_id)?;
        let sort = self.sorts.resolve(sort_id)?;
        let needle = query_text.to_lowercase();

        let mut visible: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches_normalized(*record, &needle) && filter.matches(*record))
            .map(|(index, _)| index)
            .collect();

        // Vec::sort_by is stable and `visible` is in input order.
        visible.sort_by(|&a, &b| sort.compare(&records[a], &records[b]));

        Ok(visible)
    }

    /// Positions into `records` for the query described by `selection`.
    pub fn run_indices(
        &self,
        records: &[R],
        selection: &QuerySelection,
    ) -> Result<Vec<usize>, QueryError> {
        self.query_indices(
            records,
            &selection.query_text,
            selection.filter_id.as_str(),
            selection.sort_id.as_str(),
        )
    }

    /// Run the query described by `selection`.
    pub fn run<'a>(
        &self,
        records: &'a [R],
        selection: &QuerySelection,
    ) -> Result<Vec<&'a R>, QueryError> {
        let indices = self.run_indices(records, selection)?;
        Ok(indices.into_iter().map(|i| &records[i]).collect())
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
