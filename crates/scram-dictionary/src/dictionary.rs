//! The validated dictionary built on a [`WordStore`].
//!
//! [`Dictionary`] owns its store and the running totals used to enforce the
//! configured limits. Events are emitted under the [`Span`] handed to the
//! constructor; the dictionary never installs or looks up a subscriber.
//!
//! # Invariants
//!
//! - Every stored word satisfies `min_word_length <= len <= max_word_length`.
//! - No word is stored twice.
//! - `total_length` is the sum of the character lengths of all stored words.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn, Span};

use scram_types::{CanonicalKey, Word};

use crate::config::DictionaryConfig;
use crate::error::{DictionaryError, DictionaryResult};
use crate::strategy::StorageStrategy;
use crate::traits::WordStore;

/// A set of dictionary words with enforced length limits.
pub struct Dictionary {
    store: Box<dyn WordStore>,
    config: DictionaryConfig,
    total_length: usize,
    span: Span,
}

impl Dictionary {
    /// Wrap `store` with the limits in `config`.
    ///
    /// `config` is assumed to be valid; use [`Dictionary::from_config`] to
    /// validate it first. Events are emitted without a parent span.
    pub fn new(store: Box<dyn WordStore>, config: DictionaryConfig) -> Self {
        Self::with_span(store, config, Span::none())
    }

    /// Like [`Dictionary::new`], emitting events under `span`.
    pub fn with_span(store: Box<dyn WordStore>, config: DictionaryConfig, span: Span) -> Self {
        Self {
            store,
            config,
            total_length: 0,
            span,
        }
    }

    /// Validate `config` and build an empty dictionary on the store it names.
    pub fn from_config(config: DictionaryConfig, span: Span) -> DictionaryResult<Self> {
        config.validate()?;
        let store = config.storage.build();
        Ok(Self::with_span(store, config, span))
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no word has been added.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Sum of the character lengths of all words.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Backend in use.
    pub fn strategy(&self) -> StorageStrategy {
        self.store.strategy()
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Add one word.
    ///
    /// Checks the length bounds, then duplicates, then inserts and checks
    /// the cumulative length. A [`DictionaryError::TotalLengthExceeded`]
    /// is returned *after* the word was stored and counted; the dictionary
    /// is not rolled back and should be discarded.
    pub fn add_word(&mut self, word: &str) -> DictionaryResult<()> {
        let length = word.chars().count();
        self.config.check_word_length(word, length)?;

        if self.store.contains_word(word) {
            return Err(DictionaryError::DuplicateWord(word.to_owned()));
        }

        self.store.add_word(Word::new(word)?);
        self.total_length += length;

        let max = self.config.max_sum_lengths_of_all_words;
        if self.total_length > max {
            warn!(parent: &self.span, word, total = self.total_length, max, "dictionary total length exceeded");
            return Err(DictionaryError::TotalLengthExceeded {
                total: self.total_length,
                max,
            });
        }

        info!(parent: &self.span, word, total = self.total_length, "word added");
        Ok(())
    }

    /// Add every non-empty line of `lines`, trimming surrounding whitespace.
    ///
    /// Blank lines are skipped with a warning. The first failing word aborts
    /// the load and its error is returned; words before it stay added.
    /// Returns the number of words added.
    pub fn load_from_source<I, S>(&mut self, lines: I) -> DictionaryResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for (line_number, line) in lines.into_iter().enumerate() {
            let word = line.as_ref().trim();
            if word.is_empty() {
                warn!(parent: &self.span, line = line_number + 1, "empty dictionary line; skipping");
                continue;
            }
            self.add_word(word)?;
            added += 1;
        }

        info!(
            parent: &self.span,
            added,
            words = self.len(),
            total_length = self.total_length,
            strategy = %self.strategy(),
            "dictionary loaded"
        );
        Ok(added)
    }

    /// Read a UTF-8 file and load its lines with [`Dictionary::load_from_source`].
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> DictionaryResult<usize> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(parent: &self.span, path = %path.display(), bytes = contents.len(), "reading dictionary file");
        self.load_from_source(contents.lines())
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// Returns `true` if `word` was added.
    pub fn contains_word(&self, word: &str) -> bool {
        self.store.contains_word(word)
    }

    /// All original words.
    pub fn get_all_words(&self) -> HashSet<String> {
        self.store.get_all_words()
    }

    /// Canonical key of `word`, computed on the spot if it was never added.
    pub fn get_canonical_word(&self, word: &str) -> CanonicalKey {
        self.store.get_canonical_word(word)
    }

    /// Borrowing iterator over the stored words.
    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.store.words()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("strategy", &self.strategy())
            .field("word_count", &self.len())
            .field("total_length", &self.total_length)
            .field("config", &self.config)
            .finish()
    }
}
