//! Candidate windows over a token sequence

use crate::api::Language;
use crate::domain::token::Token;

/// A contiguous run of tokens `[start, start + len)` joined into a phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Joined phrase
    pub phrase: String,
    /// Index of the first token
    pub start: usize,
    /// Number of tokens
    pub len: usize,
}

/// Join `tokens[start..start + len]` into a phrase
///
/// Returns an empty string when the window does not fit inside the sequence,
/// which callers treat as "no more candidates at this length".
pub fn build_phrase(tokens: &[Token], start: usize, len: usize, language: Language) -> String {
    match window(tokens, start, len) {
        Some(run) => {
            let surfaces: Vec<&str> = run.iter().map(|t| t.surface.as_str()).collect();
            language.join(&surfaces)
        }
        None => String::new(),
    }
}

fn window(tokens: &[Token], start: usize, len: usize) -> Option<&[Token]> {
    if len == 0 || start >= tokens.len() {
        return None;
    }
    let end = start.checked_add(len)?;
    tokens.get(start..end)
}

/// Iterator over all windows of a fixed length, left to right
pub struct Windows<'a> {
    tokens: &'a [Token],
    len: usize,
    next: usize,
    language: Language,
}

impl<'a> Windows<'a> {
    /// Create an iterator over windows of `len` tokens
    pub fn new(tokens: &'a [Token], len: usize, language: Language) -> Self {
        Self {
            tokens,
            len,
            next: 0,
            language,
        }
    }
}

impl Iterator for Windows<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next;
        let phrase = build_phrase(self.tokens, start, self.len, self.language);

        // an empty phrase ends the scan at this length, even when it comes
        // from whitespace-only tokens rather than the end of the sequence
        if phrase.trim().is_empty() {
            self.next = self.tokens.len();
            return None;
        }

        self.next += 1;
        Some(Candidate {
            phrase,
            start,
            len: self.len,
        })
    }
}
