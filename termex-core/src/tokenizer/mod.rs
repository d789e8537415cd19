//! Tokenizer adapters
//!
//! The extraction engine only sees an ordered list of [`Token`]s. Adapters
//! turn raw text into that list; [`DefaultTokenizer`] uses jieba for Chinese
//! and Unicode word boundaries for English.

mod chinese;
mod english;

pub use chinese::tokenize_chinese;
pub use english::tokenize_english;

use crate::api::{Language, Result};
use crate::domain::Token;

/// Turns text into an ordered token sequence
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text` according to `language`
    fn tokenize(&self, text: &str, language: Language) -> Result<Vec<Token>>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str, Language) -> Result<Vec<Token>> + Send + Sync,
{
    fn tokenize(&self, text: &str, language: Language) -> Result<Vec<Token>> {
        self(text, language)
    }
}

/// jieba for Chinese, UAX #29 word boundaries for English
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    fn tokenize(&self, text: &str, language: Language) -> Result<Vec<Token>> {
        let tokens = match language {
            Language::Chinese => tokenize_chinese(text),
            Language::English => tokenize_english(text),
        };
        log::trace!("{} {language} tokens", tokens.len());
        Ok(tokens)
    }
}
