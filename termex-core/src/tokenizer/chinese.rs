//! Chinese segmentation and part-of-speech tagging with jieba

use jieba_rs::Jieba;
use once_cell::sync::Lazy;

use crate::domain::Token;

static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

/// Segment and tag Chinese text, dropping whitespace-only tokens
pub fn tokenize_chinese(text: &str) -> Vec<Token> {
    JIEBA
        .tag(text, true)
        .into_iter()
        .filter(|tag| !tag.word.trim().is_empty())
        .map(|tag| Token::new(tag.word, tag.tag))
        .collect()
}
