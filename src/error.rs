use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the index and its collaborators.
///
/// A query that does not occur in the text is not an error; `locate` reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum TrieError {
    /// The text source could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text source produced no symbols.
    #[error("sequence is empty")]
    EmptySequence,

    /// A byte outside the alphabet was found in a text or a query.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character
        symbol: char,
        /// Offset of the character in its input
        position: usize,
    },

    /// `locate` was called with an empty query.
    #[error("query is empty")]
    EmptyQuery,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrieError>;
