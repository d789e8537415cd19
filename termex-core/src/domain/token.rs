//! Token type produced by tokenizer adapters

/// A surface form with its grammatical tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Text as it appears in the document
    pub surface: String,
    /// Part-of-speech or coarse class tag
    pub tag: String,
}

impl Token {
    /// Create a new token
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }

    /// Build untagged tokens from surfaces, mostly useful in tests
    pub fn from_surfaces<I, S>(surfaces: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        surfaces.into_iter().map(|s| Token::new(s, "")).collect()
    }
}
