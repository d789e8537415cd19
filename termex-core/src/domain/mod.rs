//! Extraction algorithm and the data it works on

pub mod engine;
pub mod filter;
pub mod index;
pub mod library;
pub mod meaning;
pub mod ordinal;
pub mod token;
pub mod window;

pub use engine::{extract, Extraction, Extractor, Vocabulary};
pub use filter::remove_case_duplicates;
pub use index::{MatchIndex, Occurrences, Span};
pub use library::TermLibrary;
pub use meaning::{assemble, assemble_all, Assembled, AssemblyFailure, OutputLine};
pub use token::Token;
pub use window::{build_phrase, Candidate, Windows};
