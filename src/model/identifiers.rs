//! Core identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

/// Unique identifier of a record (a case or a precedent) within its list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidRecordId)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        RecordId::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Identifier of a registered filter ("all", "active", "high-priority", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterId(String);

impl FilterId {
    /// The default filter every registry carries. Its predicate accepts everything.
    pub const ALL: &'static str = "all";

    /// Smart constructor: validates non-empty filter id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSelectorId> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidSelectorId)
        } else {
            Ok(Self(s))
        }
    }

    /// The `all` filter id.
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a registered sort ("deadline", "relevance", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortId(String);

impl SortId {
    /// Smart constructor: validates non-empty sort id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSelectorId> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidSelectorId)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Record id was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record id must not be empty")]
pub struct InvalidRecordId;

/// Filter or sort id was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("filter and sort ids must not be empty")]
pub struct InvalidSelectorId;
