//! Error types for sequence trees

use thiserror::Error;

/// Result type alias using `SequenceError`
pub type Result<T> = std::result::Result<T, SequenceError>;

///
/// Errors that can be produced while editing a sequence tree
///
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// A position fell outside `0..=len`
    #[error("position {pos} is out of range for a sequence of length {len}")]
    Range { pos: usize, len: usize },

    /// A substring range ended past the end of the sequence
    #[error("range starting at {start} with length {count} is out of range for a sequence of length {len}")]
    SubstrRange { start: usize, count: usize, len: usize },

    /// The combined length of two sequences does not fit in a `usize`
    #[error("concatenating sequences of length {left} and {right} overflows the maximum sequence length")]
    CapacityOverflow { left: usize, right: usize },
}

impl SequenceError {
    /// True for the errors raised when an offset or length falls outside a sequence
    pub fn is_range_error(&self) -> bool {
        matches!(self, SequenceError::Range { .. } | SequenceError::SubstrRange { .. })
    }
}
