//! Term dictionaries pushed into remote glossaries.
//!
//! A [`TermSet`] is an ordered mapping from source term to target term.
//! A target equal to its source means the term should stay untranslated.

mod builtin;
pub mod export;
pub mod tsv;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::ser::SerializeMap;
use std::fs;
use std::path::Path;

pub use builtin::BUILTIN_TERMS;
pub use export::{ExportFormat, export_terms, render};
pub use tsv::{EncodingError, deserialize, serialize};

/// A single source → target pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub source: String,
    pub target: String,
}

impl Entry {
    /// Returns `true` if the term is meant to stay in the source language.
    pub fn is_kept(&self) -> bool {
        self.source == self.target
    }
}

/// Ordered mapping of unique source terms to target terms.
///
/// Insertion order is kept so that display and export output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    entries: Vec<Entry>,
}

impl TermSet {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds the compiled-in academic AI term set.
    pub fn builtin() -> Self {
        BUILTIN_TERMS.iter().copied().collect()
    }

    /// Loads a term set from a TSV file.
    ///
    /// Lines without a tab are skipped, the same way remote responses are read.
    pub fn load_tsv(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read terms file: {}", path.display()))?;
        Ok(deserialize(&contents))
    }

    /// Inserts a term, replacing the target of an existing source in place.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        let source = source.into();
        let target = target.into();

        if let Some(existing) = self.entries.iter_mut().find(|e| e.source == source) {
            existing.target = target;
        } else {
            self.entries.push(Entry { source, target });
        }
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.source == source)
            .map(|e| e.target.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of terms that stay untranslated.
    pub fn kept_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_kept()).count()
    }
}

impl<S, T> FromIterator<(S, T)> for TermSet
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (source, target) in iter {
            set.insert(source, target);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as a JSON object in insertion order.
impl Serialize for TermSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.source, &entry.target)?;
        }
        map.end()
    }
}
