//! Error types for phonedat.

use thiserror::Error;

/// Error type for dataset loading and lookup operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer too short to contain the 8-byte header
    #[error("invalid header size: expected at least {expected} bytes, got {actual}")]
    InvalidHeaderSize { expected: usize, actual: usize },

    /// Index region out of bounds or not a whole number of entries
    #[error("invalid index region: offset {offset} in {len}-byte dataset")]
    InvalidIndexRegion { offset: u32, len: usize },

    /// Phone number length outside the accepted range
    #[error("illegal phone number length: {0}")]
    InvalidPhoneLength(usize),

    /// First seven characters do not form a base-10 number
    #[error("invalid phone number prefix: {0}")]
    InvalidPrefix(String),

    /// No index entry for the phone number's prefix
    #[error("no data found for phone number: {0}")]
    NotFound(String),

    /// Record region violates the delimited-field shape at a matched offset
    #[error("corrupt record at offset {offset}: {reason}")]
    CorruptRecord { offset: u32, reason: &'static str },

    /// Global lookup used before a dataset was loaded
    #[error("phone dataset not loaded")]
    NotLoaded,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for phonedat operations.
pub type Result<T> = std::result::Result<T, Error>;
