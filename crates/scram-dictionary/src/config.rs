use serde::{Deserialize, Serialize};

use crate::error::{DictionaryError, DictionaryResult};
use crate::strategy::StorageStrategy;

/// Limits and storage choice for a [`Dictionary`](crate::Dictionary).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictionaryConfig {
    /// Shortest accepted word, in characters.
    pub min_word_length: usize,
    /// Longest accepted word, in characters.
    pub max_word_length: usize,
    /// Cap on the sum of all word lengths.
    pub max_sum_lengths_of_all_words: usize,
    /// Word store backend.
    pub storage: StorageStrategy,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            min_word_length: 5,
            max_word_length: 200,
            max_sum_lengths_of_all_words: 200,
            storage: StorageStrategy::Eager,
        }
    }
}

impl DictionaryConfig {
    /// Build and validate a configuration with the default storage strategy.
    pub fn new(
        min_word_length: usize,
        max_word_length: usize,
        max_sum_lengths_of_all_words: usize,
    ) -> DictionaryResult<Self> {
        let config = Self {
            min_word_length,
            max_word_length,
            max_sum_lengths_of_all_words,
            storage: StorageStrategy::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Same limits, different backend.
    pub fn with_storage(mut self, storage: StorageStrategy) -> Self {
        self.storage = storage;
        self
    }

    /// Check that every limit is positive and
    /// `min_word_length <= max_word_length <= max_sum_lengths_of_all_words`.
    pub fn validate(&self) -> DictionaryResult<()> {
        for (name, value) in [
            ("min_word_length", self.min_word_length),
            ("max_word_length", self.max_word_length),
            ("max_sum_lengths_of_all_words", self.max_sum_lengths_of_all_words),
        ] {
            if value == 0 {
                return Err(DictionaryError::InvalidConfig(format!(
                    "`{name}` must be positive"
                )));
            }
        }

        if self.min_word_length > self.max_word_length {
            return Err(DictionaryError::InvalidConfig(format!(
                "`max_word_length` ({}) must be greater than or equal to `min_word_length` ({})",
                self.max_word_length, self.min_word_length
            )));
        }

        if self.max_word_length > self.max_sum_lengths_of_all_words {
            return Err(DictionaryError::InvalidConfig(format!(
                "`max_sum_lengths_of_all_words` ({}) must be greater than or equal to `max_word_length` ({})",
                self.max_sum_lengths_of_all_words, self.max_word_length
            )));
        }

        Ok(())
    }

    /// Reject a word whose character length falls outside the bounds.
    pub fn check_word_length(&self, word: &str, length: usize) -> DictionaryResult<()> {
        if (self.min_word_length..=self.max_word_length).contains(&length) {
            Ok(())
        } else {
            Err(DictionaryError::LengthConstraintViolation {
                word: word.to_owned(),
                length,
                min: self.min_word_length,
                max: self.max_word_length,
            })
        }
    }
}
