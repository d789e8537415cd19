//! Longest-match-first term extraction
//!
//! Windows are scanned from `max_window` tokens down to one. A window of `n`
//! tokens at `i` whose phrase is a library key is confirmed unless an
//! already confirmed term textually contains it and has an occurrence
//! starting at some `s` with `s <= i < s + n`. Because longer windows are
//! scanned first, a long term is always confirmed before the phrases
//! sharing its start are considered.
//!
//! A confirmed window preceded by an ordinal token (`first`, `第一`, ...)
//! is recorded as the prefixed term, with its occurrence starting at the
//! ordinal.

use std::collections::HashSet;

use log::{debug, trace};

use crate::api::{Error, Language, Result};
use crate::domain::index::{MatchIndex, Span};
use crate::domain::library::TermLibrary;
use crate::domain::ordinal;
use crate::domain::token::Token;
use crate::domain::window::Windows;

/// Set of phrases that count as terms
pub trait Vocabulary {
    /// Whether `phrase` is a known term
    fn contains_term(&self, phrase: &str) -> bool;
}

impl Vocabulary for TermLibrary {
    fn contains_term(&self, phrase: &str) -> bool {
        self.contains(phrase)
    }
}

impl Vocabulary for HashSet<String> {
    fn contains_term(&self, phrase: &str) -> bool {
        self.contains(phrase)
    }
}

impl Vocabulary for [&str] {
    fn contains_term(&self, phrase: &str) -> bool {
        self.iter().any(|term| *term == phrase)
    }
}

/// Result of one extraction run
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    terms: Vec<String>,
    index: MatchIndex,
}

impl Extraction {
    /// Confirmed terms in discovery order, each listed once
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Occurrences of every confirmed term
    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    /// Occurrences of a confirmed term
    pub fn occurrences(&self, term: &str) -> Result<&[Span]> {
        self.index
            .occurrences(term)
            .ok_or_else(|| Error::MissingIndexEntry(term.to_string()))
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no term was found
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Consume into the ordered term list
    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }

    /// Whether the candidate `phrase` starting at `window.start` is part of
    /// a confirmed term containing that text
    ///
    /// The candidate is subsumed when it starts within `window.len` tokens
    /// after the start of an occurrence of such a term.
    fn is_subsumed(&self, phrase: &str, window: Span) -> Result<bool> {
        for term in self.terms.iter().filter(|term| term.contains(phrase)) {
            let subsumed = self
                .occurrences(term)?
                .iter()
                .any(|span| span.start <= window.start && window.start < span.start + window.len);
            if subsumed {
                trace!("'{phrase}' at {} is part of '{term}'", window.start);
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn record(&mut self, term: String, span: Span) {
        if self.index.record(&term, span) {
            debug!("confirmed term '{term}' at token {}", span.start);
            self.terms.push(term);
        } else {
            trace!("additional occurrence of '{term}' at token {}", span.start);
        }
    }
}

/// Term extractor for one language and maximum window size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extractor {
    language: Language,
    max_window: usize,
}

impl Extractor {
    /// Create an extractor; `max_window` must be at least one token
    pub fn new(language: Language, max_window: usize) -> Result<Self> {
        if max_window == 0 {
            return Err(Error::Configuration(
                "max_window must be greater than 0".into(),
            ));
        }
        Ok(Self {
            language,
            max_window,
        })
    }

    /// Language used to join tokens
    pub fn language(&self) -> Language {
        self.language
    }

    /// Longest window considered, in tokens
    pub fn max_window(&self) -> usize {
        self.max_window
    }

    /// Extract every term of `vocabulary` found in `tokens`
    ///
    /// Each call starts from an empty match index, so repeated runs over
    /// the same tokens give identical results.
    pub fn extract<V>(&self, tokens: &[Token], vocabulary: &V) -> Result<Extraction>
    where
        V: Vocabulary + ?Sized,
    {
        let mut extraction = Extraction::default();

        for len in (1..=self.max_window).rev() {
            for candidate in Windows::new(tokens, len, self.language) {
                let phrase = candidate.phrase.trim();
                if !vocabulary.contains_term(phrase) {
                    continue;
                }

                let window = Span::new(candidate.start, candidate.len);
                if extraction.is_subsumed(phrase, window)? {
                    debug!("suppressed '{phrase}' at token {}", candidate.start);
                    continue;
                }

                let (term, span) = match ordinal::detect_prefix(tokens, candidate.start) {
                    Some(prefix) => (
                        ordinal::attach_prefix(prefix, phrase, self.language),
                        Span::new(candidate.start - 1, candidate.len + 1),
                    ),
                    None => (phrase.to_string(), window),
                };
                extraction.record(term, span);
            }
        }

        Ok(extraction)
    }
}

/// Extract terms with a one-off [`Extractor`]
pub fn extract<V>(
    tokens: &[Token],
    vocabulary: &V,
    max_window: usize,
    language: Language,
) -> Result<Extraction>
where
    V: Vocabulary + ?Sized,
{
    Extractor::new(language, max_window)?.extract(tokens, vocabulary)
}
