//! File header written in front of a compressed stream.
//!
//! The header is six bytes, little-endian on every host:
//!
//! ```text
//! offset  size  field
//! 0       4     magic (0x8badbeef)
//! 4       2     permission bits of the original file
//! ```

use lz78_core::error::{Lz78Error, Result};
use std::io::{Read, Write};

/// Magic number identifying a compressed file.
pub const MAGIC: u32 = 0x8bad_beef;

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 6;

/// Mask for the permission bits kept in the header.
pub const PROTECTION_MASK: u16 = 0o7777;

/// Compressed file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic number; [`MAGIC`] for files written by this crate.
    pub magic: u32,
    /// Unix permission bits of the original file.
    pub protection: u16,
}

impl FileHeader {
    /// Create a header with the standard magic and the given permission
    /// bits. Bits outside [`PROTECTION_MASK`] are dropped.
    pub fn new(protection: u32) -> Self {
        Self {
            magic: MAGIC,
            protection: (protection & u32::from(PROTECTION_MASK)) as u16,
        }
    }

    /// Serialize to little-endian bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.magic.to_le_bytes());
        buf[4..6].copy_from_slice(&self.protection.to_le_bytes());
        buf
    }

    /// Deserialize from little-endian bytes without validating the magic.
    pub fn from_bytes(buf: [u8; HEADER_SIZE]) -> Self {
        Self {
            magic: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            protection: u16::from_le_bytes([buf[4], buf[5]]),
        }
    }

    /// Write the header to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read a header from a reader and check its magic.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        reader.read_exact(&mut buf)?;

        let header = Self::from_bytes(buf);
        if header.magic != MAGIC {
            return Err(Lz78Error::invalid_magic(MAGIC, header.magic));
        }
        Ok(header)
    }
}
