//! Terminology extraction against a known term library
//!
//! Text is tokenized, then candidate phrases of up to `max_window` tokens are
//! matched against the library, longest first. A phrase starting where an
//! already confirmed longer match containing it starts is suppressed, and a term directly preceded
//! by an ordinal (`first`…`tenth`, `第一`…`第十`) is extended with it. Each
//! retained term is finally annotated with its meaning; prefixed terms get
//! the ordinal translated into the other language.
//!
//! # Architecture
//!
//! - **api**: configuration, input/output types and the [`TermExtractor`] facade
//! - **domain**: windows, match index, extraction engine, meaning assembly
//! - **tokenizer**: adapters producing token sequences (jieba, Unicode words)
//!
//! # Example
//!
//! ```rust
//! use termex_core::{Config, TermExtractor, TermLibrary};
//!
//! let library = TermLibrary::parse("hello world\tm1\npython\tm2\nhello\t你好\n");
//! let extractor = TermExtractor::new(library, Config::default());
//!
//! let output = extractor
//!     .process_text("hello world, hello python, first hello")
//!     .unwrap();
//!
//! assert_eq!(output.terms(), &["hello world", "hello", "python", "first hello"]);
//! assert_eq!(output.lines[3].to_string(), "first hello\t第一你好");
//! ```

pub mod api;
pub mod domain;
pub mod tokenizer;

pub use api::{
    Config, ConfigBuilder, Error, Input, Language, Output, ProcessingMetadata, Result,
    TermExtractor, Terms,
};
pub use domain::{
    assemble, assemble_all, build_phrase, extract, remove_case_duplicates, Extraction, Extractor,
    MatchIndex, OutputLine, Span, TermLibrary, Token, Vocabulary,
};
pub use tokenizer::{DefaultTokenizer, Tokenizer};
