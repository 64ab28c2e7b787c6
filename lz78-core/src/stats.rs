//! Per-run statistics.
//!
//! Every encode and decode run returns a [`CodecStats`] instead of updating
//! process-wide counters.

use serde::Serialize;

/// Byte and dictionary counters for one encode or decode run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CodecStats {
    /// Bytes consumed from the source.
    pub bytes_read: u64,
    /// Bytes handed to the sink.
    pub bytes_written: u64,
    /// Number of `(code, symbol)` pairs, excluding the stop pair.
    pub pairs: u64,
    /// Number of times the dictionary filled up and was reset.
    pub dictionary_resets: u64,
}

impl CodecStats {
    /// Account for container bytes (such as a file header) that sit on the
    /// compressed side of the run.
    ///
    /// `compressed_is_output` tells whether the compressed side is the sink
    /// (encoding) or the source (decoding).
    pub fn with_container_bytes(mut self, bytes: u64, compressed_is_output: bool) -> Self {
        if compressed_is_output {
            self.bytes_written += bytes;
        } else {
            self.bytes_read += bytes;
        }
        self
    }

    /// Space saving in percent: `100 * (1 - compressed / uncompressed)`.
    ///
    /// `compressed_is_output` has the same meaning as in
    /// [`CodecStats::with_container_bytes`]. Returns 0 when nothing was
    /// uncompressed.
    pub fn compression_ratio(&self, compressed_is_output: bool) -> f64 {
        let (compressed, uncompressed) = if compressed_is_output {
            (self.bytes_written, self.bytes_read)
        } else {
            (self.bytes_read, self.bytes_written)
        };

        if uncompressed == 0 {
            return 0.0;
        }
        (1.0 - compressed as f64 / uncompressed as f64) * 100.0
    }
}
