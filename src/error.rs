use thiserror::Error;

/// Errors produced when constructing puzzle boards.
///
/// Search exhaustion is deliberately not represented here -- an emptied
/// fringe is a defined terminal outcome of the search
/// ([`SearchOutcome::Exhausted`](crate::search::SearchOutcome)), not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// The requested dimension is below the supported minimum.
    #[error("puzzle dimension must be at least 3, got {n}")]
    InvalidDimension { n: usize },
    /// Raw tile data is not a permutation of `0..n*n`.
    #[error("tile data is not a permutation of 0..{expected}")]
    MalformedTiles { expected: usize },
}
