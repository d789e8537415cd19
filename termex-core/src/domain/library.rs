//! Term library: a read-only mapping from term to meaning
//!
//! The source format is plain text with one `term<TAB>meaning` entry per
//! line. The line is split at the first tab and both halves are trimmed.
//! Lines without a tab, or with an empty term, are skipped and counted.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::api::Result;

/// Mapping from term text to meaning text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermLibrary {
    entries: HashMap<String, String>,
    skipped: usize,
}

impl TermLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a library from its text form
    pub fn parse(source: &str) -> Self {
        let mut library = Self::new();
        for line in source.lines() {
            library.push_line(line);
        }
        library
    }

    /// Read a library line by line
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut library = Self::new();
        for line in reader.lines() {
            library.push_line(&line?);
        }
        Ok(library)
    }

    /// Read a library from a UTF-8 file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    fn push_line(&mut self, line: &str) {
        let line = line.strip_prefix('\u{feff}').unwrap_or(line);
        let Some((term, meaning)) = line.split_once('\t') else {
            if !line.trim().is_empty() {
                self.skipped += 1;
            }
            return;
        };
        let term = term.trim();
        if term.is_empty() {
            self.skipped += 1;
            return;
        }
        self.insert(term, meaning.trim());
    }

    /// Add or replace an entry
    pub fn insert(&mut self, term: impl Into<String>, meaning: impl Into<String>) {
        self.entries.insert(term.into(), meaning.into());
    }

    /// Meaning of `term`
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Whether `term` is a key
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All terms, in arbitrary order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Non-blank lines that were ignored while parsing
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

impl<K, V> FromIterator<(K, V)> for TermLibrary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut library = Self::new();
        for (term, meaning) in iter {
            library.insert(term, meaning);
        }
        library
    }
}
