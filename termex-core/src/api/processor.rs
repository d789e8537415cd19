//! Term extraction processor

use std::time::Instant;

use log::{debug, info};

use crate::api::{Config, Input, Language, Output, ProcessingMetadata, Result};
use crate::domain::{assemble_all, remove_case_duplicates, Extractor, TermLibrary, Token};
use crate::tokenizer::{DefaultTokenizer, Tokenizer};

/// Terms retained for one document, before meaning assembly
#[derive(Debug, Clone)]
pub struct Terms {
    /// Retained terms in order
    pub terms: Vec<String>,
    /// Number of tokens in the document
    pub token_count: usize,
    /// Distinct terms found by the engine
    pub terms_found: usize,
}

/// Extracts library terms from documents and annotates them with meanings
pub struct TermExtractor {
    library: TermLibrary,
    config: Config,
    tokenizer: Box<dyn Tokenizer>,
}

impl std::fmt::Debug for TermExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermExtractor")
            .field("library_size", &self.library.len())
            .field("config", &self.config)
            .finish()
    }
}

impl TermExtractor {
    /// Create an extractor using the default tokenizer
    pub fn new(library: TermLibrary, config: Config) -> Self {
        Self::with_tokenizer(library, config, DefaultTokenizer)
    }

    /// Create an extractor with a custom tokenizer
    pub fn with_tokenizer(
        library: TermLibrary,
        config: Config,
        tokenizer: impl Tokenizer + 'static,
    ) -> Self {
        Self {
            library,
            config,
            tokenizer: Box::new(tokenizer),
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the term library
    pub fn library(&self) -> &TermLibrary {
        &self.library
    }

    /// Language of the processed text
    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Tokenize `text` with the configured tokenizer
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        self.tokenizer.tokenize(text, self.config.language)
    }

    /// Extract and filter terms without assembling meanings
    pub fn extract_terms(&self, text: &str) -> Result<Terms> {
        let tokens = self.tokenize(text)?;
        let extractor = Extractor::new(self.config.language, self.config.max_window)?;
        let extraction = extractor.extract(&tokens, &self.library)?;
        let terms_found = extraction.len();

        let mut terms = extraction.into_terms();
        if self.config.remove_case_duplicates && !self.config.language.is_character_segmented() {
            terms = remove_case_duplicates(terms);
        }

        Ok(Terms {
            terms,
            token_count: tokens.len(),
            terms_found,
        })
    }

    /// Process a document end to end
    ///
    /// Terms whose meaning cannot be assembled are reported in
    /// [`Output::failures`] and do not stop the remaining terms.
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let text = input.into_text()?;
        let Terms {
            terms,
            token_count,
            terms_found,
        } = self.extract_terms(&text)?;
        let terms_removed = terms_found - terms.len();
        debug!("{terms_found} terms found, {terms_removed} case duplicates removed");

        let assembled = assemble_all(&terms, &self.library, self.config.language);
        info!(
            "extracted {} terms from {token_count} tokens ({} failed)",
            assembled.lines.len(),
            assembled.failures.len()
        );

        Ok(Output {
            lines: assembled.lines,
            failures: assembled.failures,
            metadata: ProcessingMetadata {
                terms,
                token_count,
                terms_found,
                terms_removed,
                duration: start.elapsed(),
            },
        })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }
}
