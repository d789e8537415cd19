//! English word tokenization on Unicode word boundaries
//!
//! Punctuation becomes its own token, so `world,` yields `world` and `,`.
//! Tags reuse jieba's tagset: `eng` for words, `m` for numerals, `x` for
//! punctuation and symbols.

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::Token;

/// Split English text into word and punctuation tokens
pub fn tokenize_english(text: &str) -> Vec<Token> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| Token::new(segment, tag(segment)))
        .collect()
}

fn tag(segment: &str) -> &'static str {
    if segment.chars().any(char::is_alphabetic) {
        "eng"
    } else if segment.chars().any(|ch| ch.is_numeric()) {
        "m"
    } else {
        "x"
    }
}
