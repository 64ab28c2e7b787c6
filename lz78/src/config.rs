//! LZ78 codec configuration.

use crate::code::{MAX_CODE, START_CODE};
use lz78_core::DEFAULT_BLOCK_SIZE;
use lz78_core::error::{Lz78Error, Result};

/// LZ78 configuration parameters.
///
/// Encoder and decoder must agree on `max_code`; `block_size` only affects
/// buffering and never the bytes produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz78Config {
    /// Exclusive upper bound on assigned codes. When the next code reaches
    /// this value the dictionary is reset.
    pub max_code: u16,
    /// Size in bytes of the I/O staging blocks.
    pub block_size: usize,
}

impl Lz78Config {
    /// Standard configuration.
    ///
    /// - Codes up to 65534, so code widths grow to 16 bits
    /// - 4 KiB blocks
    pub const DEFAULT: Self = Self {
        max_code: MAX_CODE,
        block_size: DEFAULT_BLOCK_SIZE,
    };

    /// Create a new configuration.
    pub fn new(max_code: u16, block_size: usize) -> Self {
        Self {
            max_code,
            block_size,
        }
    }

    /// Return a copy with a different code limit.
    pub const fn with_max_code(self, max_code: u16) -> Self {
        Self { max_code, ..self }
    }

    /// Return a copy with a different block size.
    pub const fn with_block_size(self, block_size: usize) -> Self {
        Self { block_size, ..self }
    }

    /// Number of codes assigned in one dictionary epoch.
    pub fn codes_per_epoch(&self) -> u16 {
        self.max_code.saturating_sub(START_CODE)
    }

    /// Check that the configuration can drive a codec.
    pub fn validate(&self) -> Result<()> {
        if self.max_code <= START_CODE {
            return Err(Lz78Error::invalid_config(format!(
                "max_code must be greater than {START_CODE}, got {}",
                self.max_code
            )));
        }
        if self.block_size == 0 {
            return Err(Lz78Error::invalid_config("block size must be non-zero"));
        }
        Ok(())
    }
}

impl Default for Lz78Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Lz78Config::default();
        assert_eq!(config.max_code, 65535);
        assert_eq!(config.block_size, 4096);
        assert_eq!(config.codes_per_epoch(), 65533);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Lz78Config::DEFAULT.with_max_code(64).with_block_size(16);
        assert_eq!(config, Lz78Config::new(64, 16));
        assert_eq!(config.codes_per_epoch(), 62);
    }

    #[test]
    fn test_validate_rejects_tiny_code_space() {
        for max_code in 0..=START_CODE {
            let config = Lz78Config::DEFAULT.with_max_code(max_code);
            assert!(matches!(
                config.validate(),
                Err(Lz78Error::InvalidConfig { .. })
            ));
        }
        assert!(
            Lz78Config::DEFAULT
                .with_max_code(START_CODE + 1)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_validate_rejects_zero_block() {
        let config = Lz78Config::DEFAULT.with_block_size(0);
        assert!(config.validate().is_err());
    }
}
