//! Error types for the Hamming(8,4) codec and its file glue.
//!
//! Uncorrectable codewords are not errors. They are reported as
//! [`Correction::Uncorrectable`](crate::ecc::decoder::Correction) and decoding
//! carries on with the next codeword.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was outside its valid domain
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The encoded stream does not hold whole codeword pairs
    #[error("malformed encoded stream: {len} codewords is not a multiple of 2")]
    OddCodewordCount { len: usize },

    /// Reading or writing one of the byte streams failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
