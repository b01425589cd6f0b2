use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalKey;
use crate::error::TypeError;

/// A non-empty dictionary word.
///
/// The character length is computed once at construction. Equality and
/// hashing only look at the text, so a `HashMap<Word, _>` can be queried
/// with a `&str` through [`Borrow`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    char_len: usize,
}

impl Word {
    /// Create a word, rejecting the empty string.
    pub fn new(text: impl Into<String>) -> Result<Self, TypeError> {
        let text = text.into();
        let char_len = text.chars().count();
        if char_len == 0 {
            return Err(TypeError::EmptyWord);
        }
        Ok(Self { text, char_len })
    }

    /// The word text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// First character of the word.
    pub fn first_char(&self) -> char {
        self.text.chars().next().unwrap_or_default()
    }

    /// Last character of the word.
    pub fn last_char(&self) -> char {
        self.text.chars().next_back().unwrap_or_default()
    }

    /// Canonical key of this word.
    pub fn canonical(&self) -> CanonicalKey {
        CanonicalKey::of(&self.text)
    }

    /// Consume the word and return the owned text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl TryFrom<String> for Word {
    type Error = TypeError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl TryFrom<&str> for Word {
    type Error = TypeError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
