//! Named filter and sort registries.
//!
//! The presentation layer registers every filter and sort it offers up front,
//! then refers to them by id. Registration order is preserved so the UI can
//! cycle through them in the order they were declared.

use crate::model::{FilterId, QueryError, RegistryError, SortId};
use std::cmp::Ordering;
use std::fmt;

type Predicate<R> = Box<dyn Fn(&R) -> bool>;
type Comparator<R> = Box<dyn Fn(&R, &R) -> Ordering>;

// ===== Filters =====

/// A named predicate over records.
pub struct FilterSpec<R> {
    id: FilterId,
    label: String,
    predicate: Predicate<R>,
}

impl<R> FilterSpec<R> {
    /// Registered id.
    pub fn id(&self) -> &FilterId {
        &self.id
    }

    /// Human readable label for filter chips.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluate the predicate.
    pub fn matches(&self, record: &R) -> bool {
        (self.predicate)(record)
    }
}

impl<R> fmt::Debug for FilterSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSpec")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Ordered set of filters, always starting with the built-in `all` filter.
///
/// The `all` predicate accepts every record and cannot be replaced.
#[derive(Debug)]
pub struct FilterRegistry<R> {
    specs: Vec<FilterSpec<R>>,
}

impl<R> FilterRegistry<R> {
    /// Create a registry holding only the `all` filter, shown as `all_label`.
    pub fn new(all_label: impl Into<String>) -> Self {
        Self {
            specs: vec![FilterSpec {
                id: FilterId::all(),
                label: all_label.into(),
                predicate: Box::new(|_| true),
            }],
        }
    }

    /// Register a filter, builder style.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::ReservedFilter`] for the id `all`
    /// - [`RegistryError::DuplicateFilter`] if the id is already taken
    /// - [`RegistryError::EmptyId`] for an empty id
    pub fn with(
        mut self,
        id: &str,
        label: impl Into<String>,
        predicate: impl Fn(&R) -> bool + 'static,
    ) -> Result<Self, RegistryError> {
        if id == FilterId::ALL {
            return Err(RegistryError::ReservedFilter);
        }
        if self.position(id).is_some() {
            return Err(RegistryError::DuplicateFilter { id: id.to_string() });
        }
        let id = FilterId::new(id).map_err(|_| RegistryError::EmptyId)?;
        self.specs.push(FilterSpec {
            id,
            label: label.into(),
            predicate: Box::new(predicate),
        });
        Ok(self)
    }

    /// Look up a filter by id.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownFilter`] if nothing is registered under `id`.
    pub fn resolve(&self, id: &str) -> Result<&FilterSpec<R>, QueryError> {
        self.specs
            .iter()
            .find(|spec| spec.id.as_str() == id)
            .ok_or_else(|| QueryError::UnknownFilter { id: id.to_string() })
    }

    /// Registration index of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.id.as_str() == id)
    }

    /// All filters in registration order (`all` first).
    pub fn specs(&self) -> &[FilterSpec<R>] {
        &self.specs
    }
}

// ===== Sorts =====

/// A named comparator over records.
///
/// Comparators must be total and consistent so that ordering is deterministic.
pub struct SortSpec<R> {
    id: SortId,
    label: String,
    comparator: Comparator<R>,
}

impl<R> SortSpec<R> {
    /// Registered id.
    pub fn id(&self) -> &SortId {
        &self.id
    }

    /// Human readable label for the sort selector.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Compare two records.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        (self.comparator)(a, b)
    }
}

impl<R> fmt::Debug for SortSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSpec")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Ordered set of sorts. The first registered sort is the page default.
#[derive(Debug)]
pub struct SortRegistry<R> {
    specs: Vec<SortSpec<R>>,
}

impl<R> Default for SortRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> SortRegistry<R> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Register a sort, builder style.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateSort`] if the id is already taken
    /// - [`RegistryError::EmptyId`] for an empty id
    pub fn with(
        mut self,
        id: &str,
        label: impl Into<String>,
        comparator: impl Fn(&R, &R) -> Ordering + 'static,
    ) -> Result<Self, RegistryError> {
        if self.position(id).is_some() {
            return Err(RegistryError::DuplicateSort { id: id.to_string() });
        }
        let id = SortId::new(id).map_err(|_| RegistryError::EmptyId)?;
        self.specs.push(SortSpec {
            id,
            label: label.into(),
            comparator: Box::new(comparator),
        });
        Ok(self)
    }

    /// Look up a sort by id.
    ///
    /// # Errors
    ///
    /// [`QueryError::UnknownSort`] if nothing is registered under `id`.
    pub fn resolve(&self, id: &str) -> Result<&SortSpec<R>, QueryError> {
        self.specs
            .iter()
            .find(|spec| spec.id.as_str() == id)
            .ok_or_else(|| QueryError::UnknownSort { id: id.to_string() })
    }

    /// Registration index of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.id.as_str() == id)
    }

    /// The first registered sort, if any.
    pub fn default_sort(&self) -> Option<&SortSpec<R>> {
        self.specs.first()
    }

    /// All sorts in registration order.
    pub fn specs(&self) -> &[SortSpec<R>] {
        &self.specs
    }
}
