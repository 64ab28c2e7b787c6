//! LZ78 decoder (decompression).

use crate::code::{START_CODE, STOP_CODE, bit_len};
use crate::config::Lz78Config;
use crate::word::WordTable;
use lz78_core::CodecStats;
use lz78_core::bitstream::{ByteBlockWriter, PairReader};
use lz78_core::error::{Lz78Error, Result};
use std::io::{Read, Write};

/// LZ78 decoder for decompression.
#[derive(Debug)]
pub struct Lz78Decoder {
    config: Lz78Config,
    table: WordTable,
    next_code: u16,
}

impl Lz78Decoder {
    /// Create a new LZ78 decoder with the given configuration.
    pub fn new(config: Lz78Config) -> Result<Self> {
        config.validate()?;
        let table = WordTable::new(config.max_code)?;
        Ok(Self {
            config,
            table,
            next_code: START_CODE,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz78Config {
        &self.config
    }

    /// Decode a compressed stream from `reader` into `writer`.
    ///
    /// Pairs are read at `bit_len(next_code)` bits per code, mirroring the
    /// encoder, until the stop code.
    ///
    /// # Errors
    ///
    /// - [`Lz78Error::UnexpectedEof`] if the input ends before the stop code.
    ///   Everything decoded up to that point has been written to `writer`.
    /// - [`Lz78Error::InvalidCode`] if a pair refers to a code that has not
    ///   been assigned, which means the input is corrupt or was not produced
    ///   with the same configuration.
    pub fn decode<R: Read, W: Write>(&mut self, reader: R, writer: W) -> Result<CodecStats> {
        self.reset();

        let mut input = PairReader::with_block_size(reader, self.config.block_size);
        let mut output = ByteBlockWriter::with_block_size(writer, self.config.block_size);
        let mut stats = CodecStats::default();

        if let Err(err) = self.decode_pairs(&mut input, &mut output, &mut stats) {
            if err.is_truncation() {
                output.flush()?;
            }
            return Err(err);
        }
        output.flush()?;

        stats.bytes_read = input.bytes_read();
        stats.bytes_written = output.bytes_written();
        Ok(stats)
    }

    fn decode_pairs<R: Read, W: Write>(
        &mut self,
        input: &mut PairReader<R>,
        output: &mut ByteBlockWriter<W>,
        stats: &mut CodecStats,
    ) -> Result<()> {
        loop {
            let Some((code, symbol)) = input.read_pair(bit_len(self.next_code))? else {
                return Err(Lz78Error::unexpected_eof(input.bit_position()));
            };

            if code == STOP_CODE {
                return Ok(());
            }

            let word = self
                .table
                .lookup(code)
                .ok_or_else(|| Lz78Error::invalid_code(code, input.bit_position()))?
                .append_sym(symbol)?;
            output.write_bytes(word.as_bytes())?;
            self.table.insert(self.next_code, word);
            stats.pairs += 1;

            self.next_code += 1;
            if self.next_code >= self.config.max_code {
                self.table.reset();
                self.next_code = START_CODE;
                stats.dictionary_resets += 1;
            }
        }
    }

    /// Decode a byte slice into a new vector.
    pub fn decode_to_vec(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() * 2);
        self.decode(input, &mut output)?;
        Ok(output)
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.table.reset();
        self.next_code = START_CODE;
    }
}
