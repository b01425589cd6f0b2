use std::collections::HashMap;

use scram_types::{CanonicalKey, Word};

use crate::strategy::StorageStrategy;
use crate::traits::WordStore;

/// Word store that canonicalizes at insertion time.
///
/// Each word maps to its precomputed [`CanonicalKey`], so repeated lookups
/// are a single hash probe at the cost of keeping every key in memory.
#[derive(Clone, Debug, Default)]
pub struct EagerWordStore {
    words: HashMap<Word, CanonicalKey>,
}

impl EagerWordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: HashMap::with_capacity(capacity),
        }
    }
}

impl WordStore for EagerWordStore {
    fn add_word(&mut self, word: Word) {
        let key = word.canonical();
        self.words.insert(word, key);
    }

    fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    fn get_canonical_word(&self, word: &str) -> CanonicalKey {
        match self.words.get(word) {
            Some(key) => key.clone(),
            None => CanonicalKey::of(word),
        }
    }

    fn words(&self) -> Box<dyn Iterator<Item = &Word> + '_> {
        Box::new(self.words.keys())
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn strategy(&self) -> StorageStrategy {
        StorageStrategy::Eager
    }
}
