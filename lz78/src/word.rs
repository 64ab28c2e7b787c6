//! Decoder dictionary: words and the code-indexed word table.

use crate::code::{EMPTY_CODE, START_CODE};
use lz78_core::error::{Lz78Error, Result};

/// An immutable decoded byte sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    syms: Box<[u8]>,
}

impl Word {
    /// The empty word.
    pub fn empty() -> Self {
        Self::default()
    }

    /// New word equal to `self` followed by `sym`.
    ///
    /// The result owns a fresh buffer; `self` is left untouched.
    pub fn append_sym(&self, sym: u8) -> Result<Word> {
        let mut syms = Vec::new();
        syms.try_reserve_exact(self.syms.len() + 1)
            .map_err(|_| Lz78Error::allocation_failed("word"))?;
        syms.extend_from_slice(&self.syms);
        syms.push(sym);
        Ok(Word {
            syms: syms.into_boxed_slice(),
        })
    }

    /// The bytes of this word.
    pub fn as_bytes(&self) -> &[u8] {
        &self.syms
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.syms.len()
    }

    /// Whether this is the empty word.
    pub fn is_empty(&self) -> bool {
        self.syms.is_empty()
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.syms
    }
}

/// Table from code to [`Word`], sized for the whole code space.
#[derive(Debug)]
pub struct WordTable {
    slots: Vec<Option<Word>>,
}

impl WordTable {
    /// Create a table with `max_code` slots, only [`EMPTY_CODE`] populated.
    ///
    /// `max_code` must be greater than [`START_CODE`].
    pub fn new(max_code: u16) -> Result<Self> {
        if max_code <= START_CODE {
            return Err(Lz78Error::invalid_config(format!(
                "word table needs more than {START_CODE} slots, got {max_code}"
            )));
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(max_code as usize)
            .map_err(|_| Lz78Error::allocation_failed("word table"))?;
        slots.resize_with(max_code as usize, || None);
        slots[EMPTY_CODE as usize] = Some(Word::empty());

        Ok(Self { slots })
    }

    /// Word stored at `code`, if that code is populated.
    #[inline]
    pub fn lookup(&self, code: u16) -> Option<&Word> {
        self.slots.get(code as usize)?.as_ref()
    }

    /// Store `word` at `code`.
    ///
    /// # Panics
    ///
    /// Panics if `code` is outside the table.
    #[inline]
    pub fn insert(&mut self, code: u16, word: Word) {
        self.slots[code as usize] = Some(word);
    }

    /// Clear every slot except [`EMPTY_CODE`].
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut().skip(START_CODE as usize) {
            *slot = None;
        }
    }

    /// Number of slots (the exclusive code limit).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of populated slots, including the empty word.
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::STOP_CODE;

    #[test]
    fn test_append_sym() {
        let empty = Word::empty();
        let a = empty.append_sym(b'a').unwrap();
        let ab = a.append_sym(b'b').unwrap();

        assert!(empty.is_empty());
        assert_eq!(a.as_bytes(), b"a");
        assert_eq!(ab.as_bytes(), b"ab");
        assert_eq!(ab.len(), 2);
    }

    #[test]
    fn test_append_does_not_alias() {
        let a = Word::empty().append_sym(b'a').unwrap();
        let ab = a.append_sym(b'b').unwrap();
        let ac = a.append_sym(b'c').unwrap();

        assert_eq!(a.as_bytes(), b"a");
        assert_eq!(ab.as_bytes(), b"ab");
        assert_eq!(ac.as_bytes(), b"ac");
        assert_ne!(a.as_bytes().as_ptr(), ab.as_bytes().as_ptr());
    }

    #[test]
    fn test_new_table() {
        let table = WordTable::new(16).unwrap();
        assert_eq!(table.capacity(), 16);
        assert_eq!(table.populated(), 1);
        assert_eq!(table.lookup(EMPTY_CODE), Some(&Word::empty()));
        assert_eq!(table.lookup(STOP_CODE), None);
        assert_eq!(table.lookup(START_CODE), None);
        assert_eq!(table.lookup(16), None);
        assert_eq!(table.lookup(u16::MAX), None);
    }

    #[test]
    fn test_new_table_too_small() {
        assert!(WordTable::new(START_CODE).is_err());
    }

    #[test]
    fn test_insert_lookup_reset() {
        let mut table = WordTable::new(8).unwrap();
        let a = Word::empty().append_sym(b'a').unwrap();
        let aa = a.append_sym(b'a').unwrap();
        table.insert(2, a.clone());
        table.insert(3, aa.clone());

        assert_eq!(table.lookup(2), Some(&a));
        assert_eq!(table.lookup(3), Some(&aa));
        assert_eq!(table.populated(), 3);

        table.reset();

        assert_eq!(table.populated(), 1);
        assert_eq!(table.lookup(2), None);
        assert_eq!(table.lookup(3), None);
        assert_eq!(table.lookup(EMPTY_CODE), Some(&Word::empty()));
    }

    #[test]
    fn test_full_size_table() {
        let table = WordTable::new(u16::MAX).unwrap();
        assert_eq!(table.capacity(), 65535);
        assert_eq!(table.lookup(65534), None);
    }
}
