//! LZ78 encoder (compression).

use crate::code::{START_CODE, STOP_CODE, bit_len};
use crate::config::Lz78Config;
use crate::trie::{NodeId, Trie};
use lz78_core::CodecStats;
use lz78_core::bitstream::PairWriter;
use lz78_core::error::Result;
use std::io::{BufReader, Read, Write};

/// Position of the encoder in the trie.
#[derive(Debug, Clone, Copy)]
enum MatchState {
    /// About to start a new phrase.
    AtRoot,
    /// The symbols since the last pair match `node`, reached from a node with
    /// `parent_code` by `symbol`.
    Extending {
        node: NodeId,
        parent_code: u16,
        symbol: u8,
    },
}

impl MatchState {
    fn node(self) -> NodeId {
        match self {
            Self::AtRoot => Trie::ROOT,
            Self::Extending { node, .. } => node,
        }
    }
}

/// LZ78 encoder for compression.
#[derive(Debug)]
pub struct Lz78Encoder {
    config: Lz78Config,
    trie: Trie,
    next_code: u16,
}

impl Lz78Encoder {
    /// Create a new LZ78 encoder with the given configuration.
    pub fn new(config: Lz78Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            trie: Trie::new(),
            next_code: START_CODE,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Lz78Config {
        &self.config
    }

    /// Encode everything `reader` yields into `writer`.
    ///
    /// # Algorithm
    ///
    /// 1. Walk the trie from the root, one input byte at a time
    /// 2. On a missing child, output `(node code, byte)` using
    ///    `bit_len(next_code)` bits for the code, learn the extended
    ///    sequence as `next_code`, and go back to the root
    /// 3. When `next_code` reaches `max_code`, reset the trie
    /// 4. At end of input, output any pending match as one more pair
    /// 5. Output the `(STOP_CODE, 0)` sentinel and flush
    ///
    /// The dictionary always starts empty, so encoding the same input twice
    /// produces identical output.
    pub fn encode<R: Read, W: Write>(&mut self, reader: R, writer: W) -> Result<CodecStats> {
        self.reset();

        let input = BufReader::with_capacity(self.config.block_size, reader);
        let mut output = PairWriter::with_block_size(writer, self.config.block_size);
        let mut stats = CodecStats::default();
        let mut state = MatchState::AtRoot;

        for byte in input.bytes() {
            let symbol = byte?;
            stats.bytes_read += 1;

            let current = state.node();
            state = match self.trie.step(current, symbol) {
                Some(child) => MatchState::Extending {
                    node: child,
                    parent_code: self.trie.code(current),
                    symbol,
                },
                None => {
                    output.write_pair(self.trie.code(current), symbol, bit_len(self.next_code))?;
                    stats.pairs += 1;
                    self.trie.insert(current, symbol, self.next_code)?;
                    self.next_code += 1;
                    MatchState::AtRoot
                }
            };

            if self.reset_if_full(&mut stats) {
                state = MatchState::AtRoot;
            }
        }

        // The pending match is already a dictionary entry; send it as its
        // parent plus the last symbol so the decoder rebuilds exactly it.
        if let MatchState::Extending {
            parent_code,
            symbol,
            ..
        } = state
        {
            output.write_pair(parent_code, symbol, bit_len(self.next_code))?;
            stats.pairs += 1;
            // The decoder assigns a code to this pair, so advance in step
            // with it.
            self.next_code += 1;
            self.reset_if_full(&mut stats);
        }

        output.write_pair(STOP_CODE, 0, bit_len(self.next_code))?;
        output.flush()?;

        stats.bytes_written = output.bytes_written();
        Ok(stats)
    }

    /// Encode a byte slice into a new vector.
    pub fn encode_to_vec(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() / 2 + 4);
        self.encode(input, &mut output)?;
        Ok(output)
    }

    fn reset_if_full(&mut self, stats: &mut CodecStats) -> bool {
        if self.next_code < self.config.max_code {
            return false;
        }
        self.trie.reset();
        self.next_code = START_CODE;
        stats.dictionary_resets += 1;
        true
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.trie.reset();
        self.next_code = START_CODE;
    }
}
