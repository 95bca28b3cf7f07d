//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The engines fail fast: a precondition violation is reported before any
/// simulation step is produced, and no partial trace is ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Frame capacity must be a positive integer.
    #[error("invalid frame capacity {0}: must be at least 1")]
    InvalidCapacity(usize),

    /// An algorithm name failed to parse.
    ///
    /// Only `FIFO` and `LRU` (case-insensitive) are recognized.
    #[error("unknown replacement algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
