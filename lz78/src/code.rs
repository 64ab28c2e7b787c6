//! Reserved codes and code-width computation.

/// End-of-stream sentinel.
pub const STOP_CODE: u16 = 0;

/// Code of the empty sequence (the trie root).
pub const EMPTY_CODE: u16 = 1;

/// First code assigned to a learned sequence.
pub const START_CODE: u16 = 2;

/// Exclusive upper bound on assignable codes for the standard stream format.
pub const MAX_CODE: u16 = u16::MAX;

/// Number of bits needed to represent `code`.
///
/// Zero still takes one bit. Otherwise this is `floor(log2(code)) + 1`.
#[inline]
pub fn bit_len(code: u16) -> u8 {
    if code == 0 {
        1
    } else {
        (u16::BITS - code.leading_zeros()) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_len() {
        assert_eq!(bit_len(0), 1);
        assert_eq!(bit_len(1), 1);
        assert_eq!(bit_len(2), 2);
        assert_eq!(bit_len(3), 2);
        assert_eq!(bit_len(4), 3);
        assert_eq!(bit_len(255), 8);
        assert_eq!(bit_len(256), 9);
        assert_eq!(bit_len(MAX_CODE - 1), 16);
        assert_eq!(bit_len(MAX_CODE), 16);
    }

    #[test]
    fn test_bit_len_monotonic() {
        let mut prev = bit_len(START_CODE);
        for code in START_CODE..MAX_CODE {
            let bits = bit_len(code);
            assert!(bits >= prev);
            assert!(u32::from(code) < 1u32 << bits);
            prev = bits;
        }
    }

    #[test]
    fn test_reserved_codes_ordering() {
        assert!(STOP_CODE < EMPTY_CODE);
        assert!(EMPTY_CODE < START_CODE);
        assert!(START_CODE < MAX_CODE);
    }
}
