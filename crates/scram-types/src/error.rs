use thiserror::Error;

/// Errors produced by type construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("word must not be empty")]
    EmptyWord,

    #[error("case index must be 1-based, got {0}")]
    InvalidCaseIndex(usize),
}
