use std::path::PathBuf;

/// Errors from reading input strings.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A line is shorter or longer than the configured bounds.
    #[error("input line {line_number} does not meet the length constraints ({min} <= len(line) <= {max}), got {length}")]
    LineLength {
        line_number: usize,
        length: usize,
        min: usize,
        max: usize,
    },

    /// No non-blank line was found.
    #[error("input is empty")]
    Empty,

    /// The line length limits are inconsistent.
    #[error("invalid input configuration: {0}")]
    InvalidConfig(String),

    /// The input file could not be read.
    #[error("failed to read input file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for input operations.
pub type InputResult<T> = Result<T, InputError>;
