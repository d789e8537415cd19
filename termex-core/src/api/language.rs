//! Language type for the API

use std::fmt;
use std::str::FromStr;

use crate::api::Error;

/// Supported languages for term extraction
///
/// The two variants differ in how adjacent tokens are joined into a phrase:
/// Chinese text is character-segmented and tokens are concatenated, English
/// text is token-separated and tokens are joined with a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Token-separated text
    #[default]
    English,
    /// Character-segmented text
    Chinese,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 2] = [Language::English, Language::Chinese];

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "cn",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "Chinese",
        }
    }

    /// Whether phrases are built by plain concatenation
    pub fn is_character_segmented(&self) -> bool {
        matches!(self, Language::Chinese)
    }

    /// Join token surfaces into a phrase
    pub fn join<S: AsRef<str>>(&self, parts: &[S]) -> String {
        match self {
            Language::Chinese => parts
                .iter()
                .flat_map(|part| part.as_ref().chars())
                .filter(|ch| *ch != ' ')
                .collect(),
            Language::English => {
                let mut phrase = String::new();
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        phrase.push(' ');
                    }
                    phrase.push_str(part.as_ref());
                }
                phrase
            }
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "cn" | "zh" | "chinese" => Ok(Language::Chinese),
            _ => Err(Error::InvalidLanguage(format!(
                "unknown language '{s}' (expected one of: en, cn)"
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
