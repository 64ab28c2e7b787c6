//! # LZ78 Core
//!
//! Core components shared by the LZ78 codec and its command-line front end.
//!
//! - [`bitstream`]: Block-buffered packing of `(code, symbol)` pairs
//! - [`stats`]: Per-run byte and dictionary counters
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     encode / decode subcommands, statistics             │
//! ├─────────────────────────────────────────────────────────┤
//! │ Container                                               │
//! │     File header (magic + permission bits)               │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec                                                   │
//! │     Trie encoder, word table decoder                    │
//! ├─────────────────────────────────────────────────────────┤
//! │ BitStream (this crate)                                  │
//! │     PairReader/PairWriter, ByteBlockWriter              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lz78_core::bitstream::{PairReader, PairWriter};
//!
//! let mut output = Vec::new();
//! let mut writer = PairWriter::new(&mut output);
//! writer.write_pair(1, b'A', 2).unwrap();
//! writer.flush().unwrap();
//!
//! let mut reader = PairReader::new(output.as_slice());
//! assert_eq!(reader.read_pair(2).unwrap(), Some((1, b'A')));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod stats;

// Re-exports for convenience
pub use bitstream::{ByteBlockWriter, DEFAULT_BLOCK_SIZE, PairReader, PairWriter};
pub use error::{Lz78Error, Result};
pub use stats::CodecStats;
