//! Encoder dictionary: a byte-keyed prefix trie.
//!
//! Nodes live in an arena owned by the [`Trie`] and refer to each other by
//! [`NodeId`]. Each node keeps its children as a small array sorted by byte,
//! so a node costs a few bytes per child instead of 256 pointers. Resetting
//! or dropping the trie releases every node without walking the tree.

use crate::code::EMPTY_CODE;
use lz78_core::error::{Lz78Error, Result};

/// Handle to a node of a [`Trie`].
///
/// Handles are invalidated by [`Trie::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct TrieNode {
    code: u16,
    /// Sorted by byte.
    children: Vec<(u8, NodeId)>,
}

impl TrieNode {
    fn new(code: u16) -> Self {
        Self {
            code,
            children: Vec::new(),
        }
    }

    #[inline]
    fn find(&self, byte: u8) -> std::result::Result<usize, usize> {
        self.children.binary_search_by_key(&byte, |&(b, _)| b)
    }
}

/// Prefix trie mapping byte sequences to codes.
#[derive(Debug)]
pub struct Trie {
    /// Node arena; index 0 is the root.
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// The root node, representing the empty sequence.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a trie holding only the root, with code [`EMPTY_CODE`].
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(EMPTY_CODE)],
        }
    }

    /// Code assigned to `node`.
    #[inline]
    pub fn code(&self, node: NodeId) -> u16 {
        self.nodes[node.index()].code
    }

    /// Child of `node` for `byte`, if one has been inserted.
    #[inline]
    pub fn step(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        let parent = &self.nodes[node.index()];
        parent.find(byte).ok().map(|i| parent.children[i].1)
    }

    /// Add a child under `node` for `byte` holding `code`.
    ///
    /// Returns the new node, or `None` without touching the trie if `node`
    /// already has a child for `byte`.
    pub fn insert(&mut self, node: NodeId, byte: u8, code: u16) -> Result<Option<NodeId>> {
        let pos = match self.nodes[node.index()].find(byte) {
            Ok(_) => return Ok(None),
            Err(pos) => pos,
        };

        self.nodes[node.index()]
            .children
            .try_reserve(1)
            .map_err(|_| Lz78Error::allocation_failed("trie child link"))?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| Lz78Error::allocation_failed("trie node"))?;

        let child = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode::new(code));
        self.nodes[node.index()].children.insert(pos, (byte, child));

        Ok(Some(child))
    }

    /// Drop every node except the root.
    pub fn reset(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
    }

    /// Number of learned sequences (nodes other than the root).
    pub fn entry_count(&self) -> usize {
        self.nodes.len() - 1
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trie() {
        let trie = Trie::new();
        assert_eq!(trie.code(Trie::ROOT), EMPTY_CODE);
        assert_eq!(trie.entry_count(), 0);
        for byte in 0..=255u8 {
            assert_eq!(trie.step(Trie::ROOT, byte), None);
        }
    }

    #[test]
    fn test_insert_and_step() {
        let mut trie = Trie::new();

        let a = trie.insert(Trie::ROOT, b'a', 2).unwrap().unwrap();
        let ab = trie.insert(a, b'b', 3).unwrap().unwrap();

        assert_eq!(trie.step(Trie::ROOT, b'a'), Some(a));
        assert_eq!(trie.step(a, b'b'), Some(ab));
        assert_eq!(trie.step(a, b'c'), None);
        assert_eq!(trie.step(Trie::ROOT, b'b'), None);
        assert_eq!(trie.code(a), 2);
        assert_eq!(trie.code(ab), 3);
        assert_eq!(trie.entry_count(), 2);
    }

    #[test]
    fn test_insert_occupied_is_noop() {
        let mut trie = Trie::new();
        let first = trie.insert(Trie::ROOT, 7, 2).unwrap().unwrap();

        assert_eq!(trie.insert(Trie::ROOT, 7, 9).unwrap(), None);
        assert_eq!(trie.step(Trie::ROOT, 7), Some(first));
        assert_eq!(trie.code(first), 2);
        assert_eq!(trie.entry_count(), 1);
    }

    #[test]
    fn test_children_in_any_order() {
        let mut trie = Trie::new();
        let bytes = [200u8, 3, 255, 0, 100, 42];
        let mut ids = Vec::new();
        for (i, &b) in bytes.iter().enumerate() {
            ids.push(trie.insert(Trie::ROOT, b, 2 + i as u16).unwrap().unwrap());
        }
        for (i, &b) in bytes.iter().enumerate() {
            let node = trie.step(Trie::ROOT, b).unwrap();
            assert_eq!(node, ids[i]);
            assert_eq!(trie.code(node), 2 + i as u16);
        }
    }

    #[test]
    fn test_reset_keeps_root() {
        let mut trie = Trie::new();
        let a = trie.insert(Trie::ROOT, b'a', 2).unwrap().unwrap();
        trie.insert(a, b'a', 3).unwrap();

        trie.reset();

        assert_eq!(trie.entry_count(), 0);
        assert_eq!(trie.code(Trie::ROOT), EMPTY_CODE);
        assert_eq!(trie.step(Trie::ROOT, b'a'), None);

        // The trie is usable again after a reset.
        let a = trie.insert(Trie::ROOT, b'a', 2).unwrap().unwrap();
        assert_eq!(trie.step(Trie::ROOT, b'a'), Some(a));
    }

    #[test]
    fn test_deep_chain_drops_without_recursion() {
        let mut trie = Trie::new();
        let mut node = Trie::ROOT;
        for code in 2..60_000u16 {
            node = trie.insert(node, b'x', code).unwrap().unwrap();
        }
        assert_eq!(trie.entry_count(), 59_998);
        drop(trie);
    }
}
