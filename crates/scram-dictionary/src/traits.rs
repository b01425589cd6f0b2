use std::collections::HashSet;

use scram_types::{CanonicalKey, Word};

use crate::strategy::StorageStrategy;

/// Storage for dictionary words and their canonical keys.
///
/// Implementations must satisfy these invariants:
/// - A word that was added is reported by `contains_word` and `words`.
/// - `get_canonical_word` always equals `CanonicalKey::of(word)`, whether or
///   not the word was ever added.
/// - Duplicate detection is the caller's job; `add_word` never checks.
pub trait WordStore: Send + Sync {
    /// Insert a word unconditionally.
    fn add_word(&mut self, word: Word);

    /// Exact membership test on the original text.
    fn contains_word(&self, word: &str) -> bool;

    /// Canonical key of `word`.
    ///
    /// Words that were never added are canonicalized on the spot rather
    /// than reported as missing.
    fn get_canonical_word(&self, word: &str) -> CanonicalKey;

    /// Borrowing iterator over the stored words, in no particular order.
    fn words(&self) -> Box<dyn Iterator<Item = &Word> + '_>;

    /// Number of stored words.
    fn len(&self) -> usize;

    /// Which strategy this store implements.
    fn strategy(&self) -> StorageStrategy;

    /// Returns `true` if no word has been added.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All original words as owned strings.
    fn get_all_words(&self) -> HashSet<String> {
        self.words().map(|w| w.as_str().to_owned()).collect()
    }
}
