use crate::symbol::{Symbol, ALPHABET_SIZE};
use slotmap::DefaultKey;
use std::ops::RangeInclusive;

/// A node in the suffix trie, together with the edge leading into it.
///
/// The edge label is never copied: it is `text[origin + edge_start ..= origin + edge_end]`,
/// where `origin` is the suffix whose insertion created the node.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    /// Start of the suffix that first created this edge
    pub origin: usize,
    /// First edge symbol, relative to `origin`
    pub edge_start: usize,
    /// Last edge symbol (inclusive), relative to `origin`
    pub edge_end: usize,
    /// One slot per symbol, keyed by the first symbol of the child's edge
    pub children: [Option<DefaultKey>; ALPHABET_SIZE],
    /// Non-owning link used to re-attach a spliced node's child
    pub parent: Option<DefaultKey>,
}

impl TrieNode {
    /// The root has no edge and no parent.
    pub(crate) fn root() -> Self {
        Self {
            origin: 0,
            edge_start: 0,
            edge_end: 0,
            children: [None; ALPHABET_SIZE],
            parent: None,
        }
    }

    /// A single-symbol edge for suffix `origin` at suffix-relative `offset`.
    pub(crate) fn new(origin: usize, offset: usize, parent: DefaultKey) -> Self {
        Self {
            origin,
            edge_start: offset,
            edge_end: offset,
            children: [None; ALPHABET_SIZE],
            parent: Some(parent),
        }
    }

    #[inline]
    pub(crate) fn child(&self, symbol: Symbol) -> Option<DefaultKey> {
        self.children[symbol.slot()]
    }

    #[inline]
    pub(crate) fn set_child(&mut self, symbol: Symbol, child: DefaultKey) {
        debug_assert!(
            self.children[symbol.slot()].is_none(),
            "slot for {symbol} already occupied"
        );
        self.children[symbol.slot()] = Some(child);
    }

    /// Swaps the child in `symbol`'s slot, keeping the trie property.
    #[inline]
    pub(crate) fn replace_child(&mut self, symbol: Symbol, old: DefaultKey, new: DefaultKey) {
        debug_assert_eq!(
            self.children[symbol.slot()],
            Some(old),
            "replaced child must occupy its slot"
        );
        self.children[symbol.slot()] = Some(new);
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = DefaultKey> + '_ {
        self.children.iter().flatten().copied()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the child if there is exactly one.
    pub(crate) fn only_child(&self) -> Option<DefaultKey> {
        let mut children = self.children();
        match (children.next(), children.next()) {
            (Some(child), None) => Some(child),
            _ => None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Absolute text range of the edge label.
    #[inline]
    pub(crate) fn edge_range(&self) -> RangeInclusive<usize> {
        (self.origin + self.edge_start)..=(self.origin + self.edge_end)
    }
}
