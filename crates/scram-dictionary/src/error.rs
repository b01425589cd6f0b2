use std::path::PathBuf;

use scram_types::TypeError;

/// Errors from dictionary construction and loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// A word is shorter or longer than the configured bounds.
    #[error("word '{word}' does not meet the length constraints ({min} <= len(word) <= {max}), got {length}")]
    LengthConstraintViolation {
        word: String,
        length: usize,
        min: usize,
        max: usize,
    },

    /// The word is already in the dictionary.
    #[error("duplicate word found: '{0}'")]
    DuplicateWord(String),

    /// The cumulative length went over the cap after an insertion.
    #[error("the total length of all words ({total}) exceeds the allowed limit of {max}")]
    TotalLengthExceeded { total: usize, max: usize },

    /// The dictionary limits are inconsistent.
    #[error("invalid dictionary configuration: {0}")]
    InvalidConfig(String),

    /// The word could not be constructed.
    #[error("invalid word: {0}")]
    Word(#[from] TypeError),

    /// The dictionary file could not be read.
    #[error("failed to read dictionary file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fieldless category of a [`DictionaryError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DictionaryErrorKind {
    LengthConstraintViolation,
    DuplicateWord,
    TotalLengthExceeded,
    InvalidConfig,
    InvalidWord,
    Io,
}

impl DictionaryError {
    /// The category of this error.
    pub fn kind(&self) -> DictionaryErrorKind {
        match self {
            Self::LengthConstraintViolation { .. } => DictionaryErrorKind::LengthConstraintViolation,
            Self::DuplicateWord(_) => DictionaryErrorKind::DuplicateWord,
            Self::TotalLengthExceeded { .. } => DictionaryErrorKind::TotalLengthExceeded,
            Self::InvalidConfig(_) => DictionaryErrorKind::InvalidConfig,
            Self::Word(_) => DictionaryErrorKind::InvalidWord,
            Self::Io { .. } => DictionaryErrorKind::Io,
        }
    }
}

/// Result alias for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;
