//! Per-run record of where each confirmed term occurred

use std::collections::HashMap;

use smallvec::SmallVec;

/// Token range `[start, start + len)` covered by one occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Index of the first token, the ordinal prefix when one is attached
    pub start: usize,
    /// Number of tokens covered
    pub len: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last covered token
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether token `position` lies inside this span
    pub fn covers(&self, position: usize) -> bool {
        (self.start..self.end()).contains(&position)
    }
}

/// Occurrence list of a single term, in discovery order
pub type Occurrences = SmallVec<[Span; 4]>;

/// Mapping from confirmed term to all of its occurrences
///
/// Grows monotonically during one extraction run and is never shared
/// between runs.
#[derive(Debug, Clone, Default)]
pub struct MatchIndex {
    entries: HashMap<String, Occurrences>,
}

impl MatchIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence of `term`, returning true when the term is new
    pub fn record(&mut self, term: &str, span: Span) -> bool {
        match self.entries.get_mut(term) {
            Some(occurrences) => {
                occurrences.push(span);
                false
            }
            None => {
                let mut occurrences = Occurrences::new();
                occurrences.push(span);
                self.entries.insert(term.to_string(), occurrences);
                true
            }
        }
    }

    /// All occurrences of `term`
    pub fn occurrences(&self, term: &str) -> Option<&[Span]> {
        self.entries.get(term).map(|o| o.as_slice())
    }

    /// Whether `term` has been recorded
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over terms and their occurrences in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Span])> {
        self.entries
            .iter()
            .map(|(term, occurrences)| (term.as_str(), occurrences.as_slice()))
    }
}
