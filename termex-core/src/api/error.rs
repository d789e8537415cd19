//! Error types for the API

use thiserror::Error;

/// Error type for extraction operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported document language
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// The base phrase of an extracted term has no entry in the term library
    #[error("Lookup error: no meaning for '{base}' (extracted term '{term}')")]
    Lookup {
        /// The extracted term, possibly carrying an ordinal prefix
        term: String,
        /// The phrase that was looked up after removing the prefix
        base: String,
    },

    /// A prefixed term whose prefix is not an ordinal
    #[error("Unknown ordinal prefix: {0}")]
    UnknownOrdinal(String),

    /// A term entered the result list without a match index entry
    #[error("Internal error: term '{0}' has no match index entry")]
    MissingIndexEntry(String),

    /// Failure reported by a tokenizer adapter
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error only affects a single output line
    pub fn is_per_term(&self) -> bool {
        matches!(self, Error::Lookup { .. } | Error::UnknownOrdinal(_))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
