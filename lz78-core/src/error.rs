//! Error types for LZ78 operations.
//!
//! A single error type covers the bitstream, the dictionaries, and the file
//! header, so every layer can propagate with `?`.

use std::io;
use thiserror::Error;

/// The main error type for LZ78 operations.
#[derive(Debug, Error)]
pub enum Lz78Error {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary entry or buffer could not be allocated.
    #[error("Allocation failed for {what}")]
    AllocationFailed {
        /// What was being allocated.
        what: &'static str,
    },

    /// Input ended before the stop code was read.
    #[error("Unexpected end of stream at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ended.
        position: u64,
    },

    /// A code was read that has not been assigned in the current dictionary.
    #[error("Invalid LZ78 code {code} at bit position {position}")]
    InvalidCode {
        /// The offending code.
        code: u16,
        /// Bit position just after the pair carrying the code.
        position: u64,
    },

    /// Invalid magic number in the file header.
    #[error("Invalid magic number: expected {expected:#010x}, found {found:#010x}")]
    InvalidMagic {
        /// Expected magic value.
        expected: u32,
        /// Magic value found in the header.
        found: u32,
    },

    /// Codec configuration is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// Invalid code bit width requested.
    #[error("Invalid bit width: {0} (must be 1-16)")]
    InvalidBitWidth(u8),
}

/// Result type alias for LZ78 operations.
pub type Result<T> = std::result::Result<T, Lz78Error>;

impl Lz78Error {
    /// Create an allocation failure error.
    pub fn allocation_failed(what: &'static str) -> Self {
        Self::AllocationFailed { what }
    }

    /// Create an unexpected end-of-stream error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }

    /// Create an invalid code error.
    pub fn invalid_code(code: u16, position: u64) -> Self {
        Self::InvalidCode { code, position }
    }

    /// Create an invalid magic error.
    pub fn invalid_magic(expected: u32, found: u32) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error means the compressed stream was cut short.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
