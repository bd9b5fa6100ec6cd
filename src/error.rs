//! Error taxonomy for the crate's I/O boundary.
//!
//! Reduction and extraction are total on well-formed input and never return a
//! `Result`; internal invariant breaks (a "logic violation" in the language of
//! the design) panic instead, since they indicate a bug rather than a
//! recoverable condition.

/// Errors surfaced at the crate's I/O boundary (loading/saving matrices and
/// pair lists). Never produced by reduction or extraction themselves.
#[derive(Debug, thiserror::Error)]
pub enum Gf2Error {
    /// The input was not a valid serialized matrix or pair list: non-increasing
    /// column contents, an out-of-range row index, a negative dimension, or a
    /// truncated stream.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The underlying stream failed while reading or writing.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Gf2Error>;
