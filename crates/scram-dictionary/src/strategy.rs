use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::eager::EagerWordStore;
use crate::lazy::LazyWordStore;
use crate::error::DictionaryError;
use crate::traits::WordStore;

/// How a [`WordStore`] obtains canonical keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageStrategy {
    /// Compute the key once, when the word is inserted.
    #[default]
    Eager,
    /// Store only the word and compute the key on every lookup.
    Lazy,
}

impl StorageStrategy {
    /// Construct an empty store implementing this strategy.
    pub fn build(self) -> Box<dyn WordStore> {
        match self {
            Self::Eager => Box::new(EagerWordStore::new()),
            Self::Lazy => Box::new(LazyWordStore::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

impl fmt::Display for StorageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageStrategy {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(Self::Eager),
            "lazy" => Ok(Self::Lazy),
            other => Err(DictionaryError::InvalidConfig(format!(
                "unknown storage strategy '{other}' (expected 'eager' or 'lazy')"
            ))),
        }
    }
}
