use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical form of a word under the scrambling rule.
///
/// The first and last characters are kept in place and the interior
/// characters are sorted ascending by code point. Two strings of equal
/// length are scrambles of each other exactly when their canonical keys
/// are equal. Strings of two characters or fewer are their own key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Compute the canonical key of a string.
    pub fn of(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        Self::from_chars(&chars)
    }

    /// Compute the canonical key of an already decoded character window.
    pub fn from_chars(chars: &[char]) -> Self {
        if chars.len() <= 2 {
            return Self(chars.iter().collect());
        }

        let last = chars.len() - 1;
        let mut interior = chars[1..last].to_vec();
        interior.sort_unstable();

        let mut key = String::with_capacity(chars.len() * 4);
        key.push(chars[0]);
        key.extend(interior);
        key.push(chars[last]);
        Self(key)
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Canonical form of `word` as a plain string.
///
/// Shorthand for `CanonicalKey::of(word).into_string()`.
pub fn canonical(word: &str) -> String {
    CanonicalKey::of(word).into_string()
}

impl fmt::Debug for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalKey({})", self.0)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scramble_sorts_interior() {
        assert_eq!(canonical("scramble"), "sabclmre");
    }

    #[test]
    fn short_words_are_unchanged() {
        assert_eq!(canonical(""), "");
        assert_eq!(canonical("a"), "a");
        assert_eq!(canonical("ba"), "ba");
    }

    #[test]
    fn three_letters_keep_middle() {
        assert_eq!(canonical("cab"), "cab");
    }

    #[test]
    fn scrambles_share_a_key() {
        assert_eq!(CanonicalKey::of("example"), CanonicalKey::of("eaxmple"));
        assert_ne!(CanonicalKey::of("example"), CanonicalKey::of("xample"));
    }

    #[test]
    fn endpoints_are_not_sorted() {
        assert_eq!(canonical("zyxa"), "zxya");
        // Same characters, different endpoints.
        assert_ne!(CanonicalKey::of("tihs"), CanonicalKey::of("hits"));
    }

    #[test]
    fn orders_by_code_point() {
        // 'B' (66) sorts before 'a' (97).
        assert_eq!(canonical("xaBy"), "xBay");
    }

    #[test]
    fn handles_multibyte_characters() {
        assert_eq!(canonical("äöüa"), "äöüa");
        assert_eq!(canonical("xüöy"), "xöüy");
    }

    #[test]
    fn from_chars_matches_of() {
        let chars: Vec<char> = "scrambled".chars().collect();
        assert_eq!(CanonicalKey::from_chars(&chars[0..8]), CanonicalKey::of("scramble"));
    }

    #[test]
    fn display_and_serde_are_plain_strings() {
        let key = CanonicalKey::of("scramble");
        assert_eq!(key.to_string(), "sabclmre");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"sabclmre\"");
    }

    proptest! {
        #[test]
        fn deterministic(word in ".{0,24}") {
            prop_assert_eq!(canonical(&word), canonical(&word));
        }

        #[test]
        fn idempotent(word in ".{0,24}") {
            let once = canonical(&word);
            prop_assert_eq!(canonical(&once), once);
        }

        #[test]
        fn preserves_length_and_endpoints(word in ".{1,24}") {
            let key = canonical(&word);
            prop_assert_eq!(key.chars().count(), word.chars().count());
            prop_assert_eq!(key.chars().next(), word.chars().next());
            prop_assert_eq!(key.chars().last(), word.chars().last());
        }

        #[test]
        fn interior_permutation_is_invisible(
            (first, last, interior, shuffled) in (any::<char>(), any::<char>(), proptest::collection::vec(any::<char>(), 0..16))
                .prop_flat_map(|(first, last, interior)| {
                    let shuffled = Just(interior.clone()).prop_shuffle();
                    (Just(first), Just(last), Just(interior), shuffled)
                })
        ) {
            let original: String = std::iter::once(first).chain(interior).chain(std::iter::once(last)).collect();
            let scrambled: String = std::iter::once(first).chain(shuffled).chain(std::iter::once(last)).collect();
            prop_assert_eq!(canonical(&original), canonical(&scrambled));
        }
    }
}
