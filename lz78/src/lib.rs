//! # LZ78: Pure Rust LZ78 Compression
//!
//! This crate provides LZ78 (Lempel-Ziv 1978) compression and decompression
//! over any `Read`/`Write` pair.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Variable-width codes**: each code takes just enough bits for the next
//!   code to be assigned, growing from 2 to 16 bits
//! - **Dictionary reset**: the dictionary starts over when the 16-bit code
//!   space is exhausted, identically on both sides
//! - **Block I/O**: input and output are staged in 4 KiB blocks
//!
//! ## Stream Format
//!
//! A stream is a sequence of `(code, symbol)` pairs packed LSB-first with no
//! padding between pairs:
//!
//! - `code` refers to a previously learned sequence (1 is the empty
//!   sequence) and takes `bit_len(next_code)` bits
//! - `symbol` is the byte that extends it, always 8 bits
//! - the pair with code 0 ends the stream
//!
//! Each pair teaches both sides a new sequence: the referenced one plus the
//! symbol.
//!
//! ## Example
//!
//! ```rust
//! use lz78::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use lz78::{Lz78Config, compress_stream, decompress_stream};
//!
//! let original = b"abababababababab".repeat(64);
//!
//! let mut compressed = Vec::new();
//! let stats = compress_stream(original.as_slice(), &mut compressed, Lz78Config::DEFAULT).unwrap();
//! assert_eq!(stats.bytes_read, original.len() as u64);
//! assert_eq!(stats.bytes_written, compressed.len() as u64);
//!
//! let mut restored = Vec::new();
//! decompress_stream(compressed.as_slice(), &mut restored, Lz78Config::DEFAULT).unwrap();
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod code;
mod config;
mod decoder;
mod encoder;
pub mod header;
mod trie;
mod word;

pub use code::{EMPTY_CODE, MAX_CODE, START_CODE, STOP_CODE, bit_len};
pub use config::Lz78Config;
pub use decoder::Lz78Decoder;
pub use encoder::Lz78Encoder;
pub use header::{FileHeader, HEADER_SIZE, MAGIC};
pub use lz78_core::{CodecStats, Lz78Error, Result};
pub use trie::{NodeId, Trie};
pub use word::{Word, WordTable};

use std::io::{Read, Write};

/// Compress everything from `reader` into `writer` with the given
/// configuration.
///
/// # Returns
///
/// Byte and dictionary counters for the run. The stream body is written
/// without a [`FileHeader`]; callers that want one write it first.
pub fn compress_stream<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: Lz78Config,
) -> Result<CodecStats> {
    let mut encoder = Lz78Encoder::new(config)?;
    encoder.encode(reader, writer)
}

/// Decompress a stream body from `reader` into `writer` with the given
/// configuration.
///
/// # Errors
///
/// Fails with [`Lz78Error::UnexpectedEof`] if the stream ends before its stop
/// pair and with [`Lz78Error::InvalidCode`] if it is corrupt.
pub fn decompress_stream<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: Lz78Config,
) -> Result<CodecStats> {
    let mut decoder = Lz78Decoder::new(config)?;
    decoder.decode(reader, writer)
}

/// Compress data with the given configuration.
///
/// # Example
///
/// ```rust
/// use lz78::{compress_with_config, decompress_with_config, Lz78Config};
///
/// let config = Lz78Config::DEFAULT.with_max_code(64);
/// let original = vec![b'z'; 300];
/// let compressed = compress_with_config(&original, config).unwrap();
/// let decompressed = decompress_with_config(&compressed, config).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn compress_with_config(data: &[u8], config: Lz78Config) -> Result<Vec<u8>> {
    let mut encoder = Lz78Encoder::new(config)?;
    encoder.encode_to_vec(data)
}

/// Decompress data with the given configuration.
pub fn decompress_with_config(data: &[u8], config: Lz78Config) -> Result<Vec<u8>> {
    let mut decoder = Lz78Decoder::new(config)?;
    decoder.decode_to_vec(data)
}

/// Compress data with the default configuration.
///
/// This is equivalent to `compress_with_config(data, Lz78Config::DEFAULT)`.
///
/// # Example
///
/// ```rust
/// use lz78::compress;
///
/// // The empty input still carries the stop pair.
/// assert_eq!(compress(b"").unwrap(), vec![0x00, 0x00]);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with_config(data, Lz78Config::DEFAULT)
}

/// Decompress data with the default configuration.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress_with_config(data, Lz78Config::DEFAULT)
}
