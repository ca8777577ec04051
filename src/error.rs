//! Error types for the indexing core
//!
//! Every fallible operation in this crate returns a typed error from
//! this module. Malformed input is never a panic: callers get a
//! discriminated variant they can match on and surface however their
//! API layer sees fit.

use thiserror::Error;

/// Errors produced while parsing magnet URIs and mapping pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The input does not start with the literal `magnet:?` prefix
    #[error("URI must start with 'magnet:?'")]
    InvalidMagnetUri,

    /// The `xt` parameter is absent or not a supported `urn:btih:` shape
    #[error("missing or invalid 'xt' parameter (info hash)")]
    MissingInfohash,

    /// A candidate hash matched neither the 40-char hex nor the
    /// 32-char base32 shape
    #[error("info hash is neither 40-char hex nor 32-char base32")]
    InvalidInfohash,

    /// A zero piece length was supplied to the piece mapper
    #[error("piece length must be greater than zero")]
    InvalidPieceLength,
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, IndexError>;
