use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Read-only mapping from a source key to a non-empty ordered list of
/// candidate strings.
///
/// The on-disk shape matches the loader's JSON source files, a single
/// object per file:
///
/// ```json
/// { "first_names": ["Alice", "Bob"], "last_names": ["Smith", "Jones"] }
/// ```
///
/// The store is treated as immutable for the duration of any generation
/// job; refreshes must publish a new snapshot instead of mutating one a
/// job may be reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceDataStore {
    entries: BTreeMap<String, Vec<String>>,
}

impl SourceDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidate list for a key, if present.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(|values| values.as_slice())
    }

    /// Insert one list. Empty lists are rejected; a missing list and an
    /// empty one are the same defect at generation time.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Result<()> {
        let key = key.into();
        if values.is_empty() {
            return Err(Error::InvalidSourceData(format!(
                "no values for key '{key}'"
            )));
        }
        self.entries.insert(key, values);
        Ok(())
    }

    /// Merge another store into this one.
    ///
    /// Keys already present are kept unless `overwrite` is set; the skipped
    /// keys are returned so the caller can report them.
    pub fn merge(&mut self, other: SourceDataStore, overwrite: bool) -> Result<Vec<String>> {
        let mut skipped = Vec::new();
        for (key, values) in other.entries {
            if !overwrite && self.entries.contains_key(&key) {
                skipped.push(key);
                continue;
            }
            self.insert(key, values)?;
        }
        Ok(skipped)
    }

    /// Verify every stored list is non-empty.
    pub fn validate(&self) -> Result<()> {
        for (key, values) in &self.entries {
            if values.is_empty() {
                return Err(Error::InvalidSourceData(format!(
                    "no values for key '{key}'"
                )));
            }
        }
        Ok(())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|key| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
