//! Public API for term extraction
//!
//! This module wraps the extraction algorithm, the term library and the
//! tokenizer adapters behind a single [`TermExtractor`].

mod config;
mod error;
mod input;
mod language;
mod output;
mod processor;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use language::Language;
pub use output::{Output, ProcessingMetadata};
pub use processor::{TermExtractor, Terms};
