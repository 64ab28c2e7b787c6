//! Block-buffered bit-level I/O for LZ78 pair streams.
//!
//! This module provides `PairWriter` and `PairReader` for serializing
//! `(code, symbol)` pairs, where the code has a variable bit width and the
//! symbol is always 8 bits, plus `ByteBlockWriter` for the decoder's
//! reconstructed output.
//!
//! # Bit Ordering
//!
//! Bits are packed LSB-first within each byte. A pair is written as the code
//! bits (LSB first) followed by the symbol bits (LSB first), and pairs follow
//! each other with no padding. Only the last block of a stream is padded with
//! zero bits up to a byte boundary.
//!
//! # Blocks
//!
//! Both sides stage data in a fixed-size block (4096 bytes by default). The
//! writer hands a block to the underlying writer as soon as it fills; the
//! reader pulls a new block whenever it has consumed the current one.
//!
//! # Example
//!
//! ```
//! use lz78_core::bitstream::{PairReader, PairWriter};
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = PairWriter::new(&mut output);
//!     writer.write_pair(5, b'x', 3).unwrap();
//!     writer.write_pair(0, 0, 3).unwrap();
//!     writer.flush().unwrap();
//! }
//! assert_eq!(output.len(), 3); // 22 bits, rounded up
//!
//! let mut reader = PairReader::new(output.as_slice());
//! assert_eq!(reader.read_pair(3).unwrap(), Some((5, b'x')));
//! assert_eq!(reader.read_pair(3).unwrap(), Some((0, 0)));
//! ```

use crate::error::{Lz78Error, Result};
use std::io::{ErrorKind, Read, Write};

/// Default block size in bytes for both the packer and the unpacker.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Width of a symbol in bits.
pub const SYMBOL_BITS: u8 = 8;

/// Largest code width a pair may carry.
pub const MAX_CODE_BITS: u8 = 16;

#[inline]
fn check_width(code_bits: u8) -> Result<()> {
    if code_bits == 0 || code_bits > MAX_CODE_BITS {
        return Err(Lz78Error::InvalidBitWidth(code_bits));
    }
    Ok(())
}

#[inline]
fn low_mask(count: usize) -> u32 {
    (1u32 << count) - 1
}

/// Packs `(code, symbol)` pairs into fixed-size blocks.
///
/// Call [`PairWriter::flush`] at the end of the stream; it writes the partial
/// last block sized to the bits actually used, rounded up to whole bytes.
#[derive(Debug)]
pub struct PairWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Staging block, zeroed after every block write.
    block: Vec<u8>,
    /// Bits used in the current block.
    bit_offset: usize,
    /// Total bits written.
    total_bits_written: u64,
    /// Total bytes handed to the underlying writer.
    bytes_written: u64,
}

impl<W: Write> PairWriter<W> {
    /// Create a new `PairWriter` with the default block size.
    pub fn new(writer: W) -> Self {
        Self::with_block_size(writer, DEFAULT_BLOCK_SIZE)
    }

    /// Create a new `PairWriter` staging `block_size` bytes at a time.
    ///
    /// A block size of zero is treated as one byte.
    pub fn with_block_size(writer: W, block_size: usize) -> Self {
        Self {
            writer,
            block: vec![0; block_size.max(1)],
            bit_offset: 0,
            total_bits_written: 0,
            bytes_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume this `PairWriter` and return the underlying writer.
    ///
    /// Bits still staged are discarded; call [`PairWriter::flush`] first.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Get the block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block.len()
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Get the number of bytes handed to the underlying writer.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Write one pair: `code_bits` bits of `code`, then the 8-bit `symbol`.
    ///
    /// # Arguments
    ///
    /// * `code` - Code to write; bits above `code_bits` are ignored
    /// * `symbol` - Symbol byte
    /// * `code_bits` - Width of the code (1-16)
    pub fn write_pair(&mut self, code: u16, symbol: u8, code_bits: u8) -> Result<()> {
        check_width(code_bits)?;
        self.write_bits(u32::from(code), code_bits)?;
        self.write_bits(u32::from(symbol), SYMBOL_BITS)
    }

    fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        let mut remaining = count as usize;
        let mut value = value & low_mask(remaining);

        while remaining > 0 {
            if self.bit_offset == self.block.len() * 8 {
                self.write_block()?;
            }

            let shift = self.bit_offset % 8;
            let take = (8 - shift).min(remaining);
            let chunk = (value & low_mask(take)) as u8;
            self.block[self.bit_offset / 8] |= chunk << shift;

            value >>= take;
            remaining -= take;
            self.bit_offset += take;
            self.total_bits_written += take as u64;
        }

        Ok(())
    }

    /// Write the used part of the block and clear it.
    fn write_block(&mut self) -> Result<()> {
        let len = self.bit_offset.div_ceil(8);
        if len > 0 {
            self.writer.write_all(&self.block[..len])?;
            self.bytes_written += len as u64;
        }
        self.block.fill(0);
        self.bit_offset = 0;
        Ok(())
    }

    /// Write out staged bits, padding the last byte with zeros, and flush the
    /// underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.write_block()?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Unpacks `(code, symbol)` pairs from fixed-size blocks.
#[derive(Debug)]
pub struct PairReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Current block.
    block: Vec<u8>,
    /// Number of valid bytes in `block`.
    len: usize,
    /// Bits consumed from the current block.
    bit_offset: usize,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
    /// Total bytes pulled from the underlying reader.
    bytes_read: u64,
}

impl<R: Read> PairReader<R> {
    /// Create a new `PairReader` with the default block size.
    pub fn new(reader: R) -> Self {
        Self::with_block_size(reader, DEFAULT_BLOCK_SIZE)
    }

    /// Create a new `PairReader` pulling up to `block_size` bytes at a time.
    ///
    /// A block size of zero is treated as one byte.
    pub fn with_block_size(reader: R, block_size: usize) -> Self {
        Self {
            reader,
            block: vec![0; block_size.max(1)],
            len: 0,
            bit_offset: 0,
            total_bits_read: 0,
            bytes_read: 0,
        }
    }

    /// Consume this `PairReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits consumed so far.
    pub fn bit_position(&self) -> u64 {
        self.total_bits_read
    }

    /// Get the number of bytes pulled from the underlying reader.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read one pair whose code is `code_bits` wide.
    ///
    /// Returns `Ok(None)` when the input ends before a whole pair is
    /// available.
    pub fn read_pair(&mut self, code_bits: u8) -> Result<Option<(u16, u8)>> {
        check_width(code_bits)?;

        let Some(code) = self.read_bits(code_bits)? else {
            return Ok(None);
        };
        let Some(symbol) = self.read_bits(SYMBOL_BITS)? else {
            return Ok(None);
        };

        Ok(Some((code as u16, symbol as u8)))
    }

    fn read_bits(&mut self, count: u8) -> Result<Option<u32>> {
        let count = count as usize;
        let mut value = 0u32;
        let mut filled = 0;

        while filled < count {
            if self.bit_offset == self.len * 8 && !self.fill_block()? {
                return Ok(None);
            }

            let shift = self.bit_offset % 8;
            let take = (8 - shift).min(count - filled);
            let chunk = u32::from(self.block[self.bit_offset / 8] >> shift) & low_mask(take);
            value |= chunk << filled;

            filled += take;
            self.bit_offset += take;
            self.total_bits_read += take as u64;
        }

        Ok(Some(value))
    }

    /// Pull the next block. Returns `false` at end of input.
    fn fill_block(&mut self) -> Result<bool> {
        loop {
            match self.reader.read(&mut self.block) {
                Ok(n) => {
                    self.len = n;
                    self.bit_offset = 0;
                    self.bytes_read += n as u64;
                    return Ok(n > 0);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Buffers whole bytes into fixed-size blocks before writing them.
#[derive(Debug)]
pub struct ByteBlockWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Staged bytes; never longer than `capacity`.
    block: Vec<u8>,
    /// Block size.
    capacity: usize,
    /// Total bytes handed to the underlying writer.
    bytes_written: u64,
}

impl<W: Write> ByteBlockWriter<W> {
    /// Create a new `ByteBlockWriter` with the default block size.
    pub fn new(writer: W) -> Self {
        Self::with_block_size(writer, DEFAULT_BLOCK_SIZE)
    }

    /// Create a new `ByteBlockWriter` with the given block size.
    pub fn with_block_size(writer: W, block_size: usize) -> Self {
        let capacity = block_size.max(1);
        Self {
            writer,
            block: Vec::with_capacity(capacity),
            capacity,
            bytes_written: 0,
        }
    }

    /// Consume this writer and return the underlying writer.
    ///
    /// Staged bytes are discarded; call [`ByteBlockWriter::flush`] first.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Get the number of bytes handed to the underlying writer.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Stage `bytes`, writing out every block that fills.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let mut rest = bytes;
        while !rest.is_empty() {
            if self.block.len() == self.capacity {
                self.write_block()?;
            }
            let take = (self.capacity - self.block.len()).min(rest.len());
            self.block.extend_from_slice(&rest[..take]);
            rest = &rest[take..];
        }
        Ok(())
    }

    fn write_block(&mut self) -> Result<()> {
        if !self.block.is_empty() {
            self.writer.write_all(&self.block)?;
            self.bytes_written += self.block.len() as u64;
            self.block.clear();
        }
        Ok(())
    }

    /// Write any staged bytes and flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.write_block()?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Records the size of every `write` call.
    #[derive(Default)]
    struct ChunkRecorder {
        data: Vec<u8>,
        chunks: Vec<usize>,
    }

    impl Write for ChunkRecorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            self.chunks.push(buf.len());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Hands out at most one byte per `read` call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.split_first() {
                Some((&byte, rest)) if !buf.is_empty() => {
                    buf[0] = byte;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn test_lsb_first_layout() {
        let mut output = Vec::new();
        {
            let mut writer = PairWriter::new(&mut output);
            // code 0b01 in 2 bits, then 'a' = 0x61
            writer.write_pair(1, b'a', 2).unwrap();
            writer.flush().unwrap();
        }
        // bits: 1 0 | 1 0 0 0 0 1 1 0 -> 0b1000_0101, 0b10
        assert_eq!(output, vec![0x85, 0x01]);
    }

    #[test]
    fn test_pair_roundtrip_mixed_widths() {
        let pairs = [(1u16, 0xFFu8, 1u8), (3, 0x00, 2), (0x1234, 0x5A, 13), (0xFFFF, 0xA5, 16)];

        let mut output = Vec::new();
        {
            let mut writer = PairWriter::new(&mut output);
            for &(code, sym, bits) in &pairs {
                writer.write_pair(code, sym, bits).unwrap();
            }
            assert_eq!(writer.bits_written(), 1 + 2 + 13 + 16 + 4 * 8);
            writer.flush().unwrap();
        }

        let mut reader = PairReader::new(output.as_slice());
        for &(code, sym, bits) in &pairs {
            assert_eq!(reader.read_pair(bits).unwrap(), Some((code, sym)));
        }
    }

    #[test]
    fn test_code_is_masked_to_width() {
        let mut output = Vec::new();
        {
            let mut writer = PairWriter::new(&mut output);
            writer.write_pair(0b1111, 0, 2).unwrap();
            writer.flush().unwrap();
        }
        let mut reader = PairReader::new(output.as_slice());
        assert_eq!(reader.read_pair(2).unwrap(), Some((0b11, 0)));
    }

    #[test]
    fn test_invalid_width() {
        let mut writer = PairWriter::new(Vec::new());
        assert!(matches!(
            writer.write_pair(0, 0, 0),
            Err(Lz78Error::InvalidBitWidth(0))
        ));
        assert!(matches!(
            writer.write_pair(0, 0, 17),
            Err(Lz78Error::InvalidBitWidth(17))
        ));

        let mut reader = PairReader::new(&[0u8; 4][..]);
        assert!(matches!(
            reader.read_pair(17),
            Err(Lz78Error::InvalidBitWidth(17))
        ));
    }

    #[test]
    fn test_writer_flushes_full_blocks() {
        let mut recorder = ChunkRecorder::default();
        {
            let mut writer = PairWriter::with_block_size(&mut recorder, 2);
            // 3 pairs of 8 + 8 bits = 6 bytes = 3 full blocks, the last one
            // written by flush
            for i in 0..3u16 {
                writer.write_pair(i, i as u8, 8).unwrap();
            }
            assert_eq!(writer.bytes_written(), 4);
            writer.flush().unwrap();
            assert_eq!(writer.bytes_written(), 6);
        }
        assert_eq!(recorder.chunks, vec![2, 2, 2]);
        assert_eq!(recorder.data, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_final_block_rounds_up() {
        let mut recorder = ChunkRecorder::default();
        {
            let mut writer = PairWriter::with_block_size(&mut recorder, 4);
            writer.write_pair(1, 1, 3).unwrap(); // 11 bits
            writer.flush().unwrap();
            // a second flush with nothing staged writes nothing
            writer.flush().unwrap();
        }
        assert_eq!(recorder.chunks, vec![2]);
    }

    #[test]
    fn test_reader_short_reads() {
        let mut output = Vec::new();
        {
            let mut writer = PairWriter::new(&mut output);
            for i in 0..20u16 {
                writer.write_pair(i, (i * 7) as u8, 5).unwrap();
            }
            writer.flush().unwrap();
        }

        let mut reader = PairReader::new(Trickle(&output));
        for i in 0..20u16 {
            assert_eq!(reader.read_pair(5).unwrap(), Some((i, (i * 7) as u8)));
        }
        assert_eq!(reader.bytes_read(), output.len() as u64);
    }

    #[test]
    fn test_reader_small_blocks_cross_boundaries() {
        let mut output = Vec::new();
        {
            let mut writer = PairWriter::with_block_size(&mut output, 3);
            for i in 0..50u16 {
                writer.write_pair(i * 13, i as u8, 11).unwrap();
            }
            writer.flush().unwrap();
        }

        let mut reader = PairReader::with_block_size(output.as_slice(), 3);
        for i in 0..50u16 {
            assert_eq!(reader.read_pair(11).unwrap(), Some((i * 13, i as u8)));
        }
    }

    #[test]
    fn test_reader_end_of_input() {
        let mut reader = PairReader::new(&[][..]);
        assert_eq!(reader.read_pair(4).unwrap(), None);

        // Half a pair: 12 bits available, 4 + 8 + more wanted
        let mut reader = PairReader::new(&[0xFF, 0x0F][..]);
        assert_eq!(reader.read_pair(9).unwrap(), None);
        assert_eq!(reader.bit_position(), 16);
    }

    #[test]
    fn test_byte_block_writer() {
        let mut recorder = ChunkRecorder::default();
        {
            let mut writer = ByteBlockWriter::with_block_size(&mut recorder, 4);
            writer.write_bytes(b"abc").unwrap();
            writer.write_bytes(b"defgh").unwrap();
            writer.write_bytes(b"").unwrap();
            writer.write_bytes(b"ij").unwrap();
            writer.flush().unwrap();
            assert_eq!(writer.bytes_written(), 10);
        }
        assert_eq!(recorder.chunks, vec![4, 4, 2]);
        assert_eq!(recorder.data, b"abcdefghij");
    }

    #[test]
    fn test_byte_block_writer_empty_flush() {
        let mut recorder = ChunkRecorder::default();
        {
            let mut writer = ByteBlockWriter::new(&mut recorder);
            writer.flush().unwrap();
        }
        assert!(recorder.chunks.is_empty());
    }
}
