use thiserror::Error;

/// Errors produced by type codecs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid base58 string: {0}")]
    InvalidBase58(String),

    #[error("address checksum mismatch")]
    ChecksumMismatch,
}
