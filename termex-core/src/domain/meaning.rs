//! Bilingual `term<TAB>meaning` lines
//!
//! A term that is itself a library key is emitted with its meaning. A term
//! that is not must carry an ordinal prefix: the prefix is removed, the base
//! phrase is looked up, and the prefix's counterpart in the other language
//! is put in front of the meaning. Meanings of Chinese terms are English, so
//! the English ordinal is followed by a space; meanings of English terms are
//! Chinese and the ordinal is concatenated.

use std::fmt;

use serde::Serialize;

use crate::api::{Error, Language, Result};
use crate::domain::library::TermLibrary;
use crate::domain::ordinal::{self, PAIR_OFFSET};

/// One line of output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    /// Extracted term, possibly with an ordinal prefix
    pub term: String,
    /// Meaning, with the paired ordinal when the term is prefixed
    pub meaning: String,
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.term, self.meaning)
    }
}

/// A term whose line could not be assembled
#[derive(Debug)]
pub struct AssemblyFailure {
    /// The extracted term
    pub term: String,
    /// Why assembly failed
    pub error: Error,
}

/// Lines assembled for a list of terms
#[derive(Debug, Default)]
pub struct Assembled {
    /// Successfully assembled lines, in term order
    pub lines: Vec<OutputLine>,
    /// Terms that failed, in term order
    pub failures: Vec<AssemblyFailure>,
}

/// Build the output line for `term`
pub fn assemble(term: &str, library: &TermLibrary, language: Language) -> Result<OutputLine> {
    if let Some(meaning) = library.get(term) {
        return Ok(OutputLine {
            term: term.to_string(),
            meaning: meaning.to_string(),
        });
    }

    let (prefix, base) = split_prefix(term, language);
    let pos = ordinal::position(prefix)
        .filter(|pos| (*pos >= PAIR_OFFSET) == language.is_character_segmented())
        .ok_or_else(|| Error::UnknownOrdinal(prefix.to_string()))?;
    let paired = match language {
        Language::Chinese => ordinal::ORDINALS[pos - PAIR_OFFSET],
        Language::English => ordinal::ORDINALS[pos + PAIR_OFFSET],
    };

    let meaning = library.get(base).ok_or_else(|| Error::Lookup {
        term: term.to_string(),
        base: base.to_string(),
    })?;

    let meaning = match language {
        Language::Chinese => format!("{paired} {meaning}"),
        Language::English => format!("{paired}{meaning}"),
    };
    Ok(OutputLine {
        term: term.to_string(),
        meaning,
    })
}

/// Assemble every term, collecting failures instead of stopping at them
pub fn assemble_all<S: AsRef<str>>(
    terms: &[S],
    library: &TermLibrary,
    language: Language,
) -> Assembled {
    let mut assembled = Assembled::default();
    for term in terms {
        let term = term.as_ref();
        match assemble(term, library, language) {
            Ok(line) => assembled.lines.push(line),
            Err(error) => {
                log::debug!("no line for '{term}': {error}");
                assembled.failures.push(AssemblyFailure {
                    term: term.to_string(),
                    error,
                });
            }
        }
    }
    assembled
}

/// Split a prefixed term into `(prefix, base)`
///
/// Chinese ordinals are two characters long; English ones end at the first
/// space.
fn split_prefix(term: &str, language: Language) -> (&str, &str) {
    let cut = match language {
        Language::Chinese => term.char_indices().nth(2).map_or(term.len(), |(i, _)| i),
        Language::English => term.find(' ').unwrap_or(term.len()),
    };
    let (prefix, base) = term.split_at(cut);
    (prefix, base.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> TermLibrary {
        [
            ("hello world", "m1"),
            ("python", "m2"),
            ("hello", "你好"),
            ("高峰", "peak"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_plain_term() {
        let line = assemble("python", &library(), Language::English).unwrap();
        assert_eq!(line.to_string(), "python\tm2");
    }

    #[test]
    fn test_english_prefix_pairs_with_chinese() {
        let line = assemble("first hello", &library(), Language::English).unwrap();
        assert_eq!(line.meaning, "第一你好");
        assert_eq!(line.to_string(), "first hello\t第一你好");
    }

    #[test]
    fn test_chinese_prefix_pairs_with_english() {
        let line = assemble("第三高峰", &library(), Language::Chinese).unwrap();
        assert_eq!(line.to_string(), "第三高峰\tthird peak");
    }

    #[test]
    fn test_missing_base_is_lookup_error() {
        let err = assemble("second planet", &library(), Language::English).unwrap_err();
        match err {
            Error::Lookup { term, base } => {
                assert_eq!(term, "second planet");
                assert_eq!(base, "planet");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_prefix() {
        let err = assemble("zeroth hello", &library(), Language::English).unwrap_err();
        assert!(matches!(err, Error::UnknownOrdinal(prefix) if prefix == "zeroth"));

        let err = assemble("rust", &library(), Language::English).unwrap_err();
        assert!(matches!(err, Error::UnknownOrdinal(_)));

        let err = assemble("高", &library(), Language::Chinese).unwrap_err();
        assert!(matches!(err, Error::UnknownOrdinal(_)));
    }

    #[test]
    fn test_prefix_from_other_language_is_rejected() {
        let err = assemble("第一 hello", &library(), Language::English).unwrap_err();
        assert!(matches!(err, Error::UnknownOrdinal(_)));
    }

    #[test]
    fn test_assemble_all_continues_after_failure() {
        let terms = ["python", "second planet", "first hello"];
        let assembled = assemble_all(&terms, &library(), Language::English);
        assert_eq!(assembled.lines.len(), 2);
        assert_eq!(assembled.lines[0].term, "python");
        assert_eq!(assembled.lines[1].term, "first hello");
        assert_eq!(assembled.failures.len(), 1);
        assert_eq!(assembled.failures[0].term, "second planet");
        assert!(assembled.failures[0].error.is_per_term());
    }
}
