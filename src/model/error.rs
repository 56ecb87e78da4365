//! Error types for the lexdash application.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`DataError`] - Record set loading failures (unreadable file, bad JSON, duplicate ids)
//!   - [`QueryError`] - Unknown filter or sort id passed to the query engine
//!   - [`RegistryError`] - Conflicting filter/sort registrations
//!   - [`RevealError`] - Invalid reveal animation parameters
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Contract Violations vs. Empty Results
//!
//! `QueryError`, `RegistryError` and `RevealError` are contract violations: the caller
//! passed an id that was never registered, or a non-positive speed. They fail fast and
//! are never mapped onto a default behavior. A query that matches nothing is not an
//! error at all - it is an empty result the view renders as an empty state.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert to `AppError` via `From`
/// implementations, enabling clean error propagation with the `?` operator.
///
/// # Examples
///
/// ```no_run
/// use lexdash::model::error::{AppError, DataError};
///
/// fn run_app() -> Result<(), AppError> {
///     // DataError automatically converts to AppError via From
///     let _records = load_records()?;
///     Ok(())
/// }
/// # fn load_records() -> Result<(), DataError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the record set.
    ///
    /// Fatal: the dashboard has nothing to show without records.
    #[error("Failed to load data: {0}")]
    Data(#[from] DataError),

    /// A list page was configured with an unknown filter or sort id.
    #[error("Invalid list query: {0}")]
    Query(#[from] QueryError),

    /// The filter/sort catalog contains conflicting registrations.
    #[error("Invalid query registry: {0}")]
    Registry(#[from] RegistryError),

    /// A caption was configured with an invalid reveal speed.
    #[error("Invalid caption animation: {0}")]
    Reveal(#[from] RevealError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the TUI cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by the list query engine.
///
/// Both variants are caller errors: the presentation layer asked for a
/// filter or sort that was never registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No filter is registered under this id.
    #[error("unknown filter id: {id:?}")]
    UnknownFilter {
        /// The id that failed to resolve.
        id: String,
    },

    /// No sort is registered under this id.
    #[error("unknown sort id: {id:?}")]
    UnknownSort {
        /// The id that failed to resolve.
        id: String,
    },
}

/// Errors raised while building filter and sort registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A filter with this id is already registered.
    #[error("filter {id:?} is already registered")]
    DuplicateFilter {
        /// The conflicting id.
        id: String,
    },

    /// A sort with this id is already registered.
    #[error("sort {id:?} is already registered")]
    DuplicateSort {
        /// The conflicting id.
        id: String,
    },

    /// The `all` filter is built into every registry and cannot be replaced.
    #[error("filter id \"all\" is reserved")]
    ReservedFilter,

    /// An empty filter or sort id was supplied.
    #[error("filter and sort ids must not be empty")]
    EmptyId,
}

/// Errors raised when starting a text reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// The per-character delay must be strictly positive.
    #[error("reveal speed must be greater than zero")]
    NonPositiveSpeed,
}

/// Errors encountered when loading a record set.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file could not be read.
    #[error("Failed to read data file {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data set is not valid JSON or does not match the record schema.
    #[error("Invalid data set: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records of the same kind share an id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// Record kind ("case" or "precedent").
        kind: &'static str,
        /// The repeated id.
        id: String,
    },
}
