//! Ordinal prefixes that may attach in front of a matched term
//!
//! The table is a fixed parallel list: English ordinals occupy positions
//! 0..10 and their Chinese counterparts positions 10..20, so position `p`
//! and `p + 10` name the same ordinal.

use crate::api::Language;
use crate::domain::token::Token;

/// Number of ordinals per language
pub const PAIR_OFFSET: usize = 10;

/// Ordinal prefixes, English first, then Chinese in the same order
pub const ORDINALS: [&str; 20] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
    "第一", "第二", "第三", "第四", "第五", "第六", "第七", "第八", "第九", "第十",
];

/// Position of `word` in the ordinal table
pub fn position(word: &str) -> Option<usize> {
    ORDINALS.iter().position(|ordinal| *ordinal == word)
}

/// Whether `word` is one of the twenty ordinals
pub fn is_ordinal(word: &str) -> bool {
    position(word).is_some()
}

/// The same ordinal in the other language
///
/// `"first"` pairs with `"第一"` and `"第一"` pairs back with `"first"`.
pub fn paired(word: &str) -> Option<&'static str> {
    let pos = position(word)?;
    let other = if pos < PAIR_OFFSET {
        pos + PAIR_OFFSET
    } else {
        pos - PAIR_OFFSET
    };
    Some(ORDINALS[other])
}

/// Ordinal token immediately preceding `start`, if any
pub fn detect_prefix(tokens: &[Token], start: usize) -> Option<&str> {
    if start == 0 {
        return None;
    }
    let previous = tokens.get(start - 1)?.surface.as_str();
    is_ordinal(previous).then_some(previous)
}

/// Attach `prefix` in front of `phrase` using the language's joining rule
pub fn attach_prefix(prefix: &str, phrase: &str, language: Language) -> String {
    let prefix = prefix.trim();
    let phrase = phrase.trim();
    match language {
        Language::Chinese => prefix
            .chars()
            .chain(phrase.chars())
            .filter(|ch| *ch != ' ')
            .collect(),
        Language::English => format!("{prefix} {phrase}").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_symmetric() {
        for (pos, ordinal) in ORDINALS.iter().enumerate() {
            let other = paired(ordinal).unwrap();
            assert_eq!(paired(other), Some(*ordinal));
            assert_eq!(position(other).unwrap(), (pos + PAIR_OFFSET) % ORDINALS.len());
        }
        assert_eq!(paired("first"), Some("第一"));
        assert_eq!(paired("第十"), Some("tenth"));
        assert_eq!(paired("eleventh"), None);
    }

    #[test]
    fn test_detect_prefix() {
        let tokens = Token::from_surfaces(["first", "hello", "world"]);
        assert_eq!(detect_prefix(&tokens, 0), None);
        assert_eq!(detect_prefix(&tokens, 1), Some("first"));
        assert_eq!(detect_prefix(&tokens, 2), None);
        assert_eq!(detect_prefix(&tokens, 7), None);
    }

    #[test]
    fn test_detect_prefix_is_case_sensitive() {
        let tokens = Token::from_surfaces(["First", "hello"]);
        assert_eq!(detect_prefix(&tokens, 1), None);
    }

    #[test]
    fn test_attach_prefix() {
        assert_eq!(attach_prefix("first", "hello", Language::English), "first hello");
        assert_eq!(
            attach_prefix(" second ", " hello world ", Language::English),
            "second hello world"
        );
        assert_eq!(attach_prefix("第一", "高峰", Language::Chinese), "第一高峰");
        assert_eq!(attach_prefix("第一", " 高 峰 ", Language::Chinese), "第一高峰");
    }
}
