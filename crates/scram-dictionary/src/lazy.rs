use std::collections::HashSet;

use scram_types::{CanonicalKey, Word};

use crate::strategy::StorageStrategy;
use crate::traits::WordStore;

/// Word store that keeps only the words themselves.
///
/// Canonical keys are recomputed on every [`get_canonical_word`] call.
///
/// [`get_canonical_word`]: WordStore::get_canonical_word
#[derive(Clone, Debug, Default)]
pub struct LazyWordStore {
    words: HashSet<Word>,
}

impl LazyWordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: HashSet::with_capacity(capacity),
        }
    }
}

impl WordStore for LazyWordStore {
    fn add_word(&mut self, word: Word) {
        self.words.insert(word);
    }

    fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn get_canonical_word(&self, word: &str) -> CanonicalKey {
        CanonicalKey::of(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &Word> + '_> {
        Box::new(self.words.iter())
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn strategy(&self) -> StorageStrategy {
        StorageStrategy::Lazy
    }
}
