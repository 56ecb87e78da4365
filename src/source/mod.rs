//! Record set sources.
//!
//! The dashboard works on a static record set loaded once at startup:
//! - The built-in fixture compiled into the binary
//! - A JSON file with the same shape, passed via `--data`

use crate::model::{DataError, LegalCase, Precedent, RecordId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const BUILTIN_FIXTURE: &str = include_str!("fixtures.json");

/// Where the record set comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fixture compiled into the binary.
    Builtin,
    /// JSON file on disk.
    File(PathBuf),
}

impl DataSource {
    /// Pick the file source when a path was configured, the fixture otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => DataSource::File(path),
            None => DataSource::Builtin,
        }
    }

    /// Load and validate the record set.
    ///
    /// # Errors
    ///
    /// Returns `DataError` when the file cannot be read, is not valid JSON,
    /// or contains duplicate ids.
    pub fn load(&self) -> Result<DataSet, DataError> {
        match self {
            DataSource::Builtin => DataSet::builtin(),
            DataSource::File(path) => DataSet::from_path(path),
        }
    }
}

/// All records the dashboard shows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataSet {
    /// Managed cases.
    #[serde(default)]
    pub cases: Vec<LegalCase>,
    /// Research precedents.
    #[serde(default)]
    pub precedents: Vec<Precedent>,
}

impl DataSet {
    /// The built-in fixture.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_json(BUILTIN_FIXTURE)
    }

    /// Read a data set from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse a data set from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: DataSet = serde_json::from_str(json)?;
        ensure_unique("case", data.cases.iter().map(|c| &c.id))?;
        ensure_unique("precedent", data.precedents.iter().map(|p| &p.id))?;
        Ok(data)
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a RecordId>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
