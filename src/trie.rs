use crate::node::TrieNode;
use crate::sequence::Sequence;
use crate::symbol::Symbol;
use slotmap::{DefaultKey, SlotMap};

/// A suffix trie over a single [`Sequence`].
///
/// Nodes are owned by a slot map; children and parents refer to each other by key,
/// so splicing a node out during compression never leaves a dangling reference.
/// Edges store offsets into the retained text rather than copied symbols.
///
/// Once compressed the trie is read-only and can be queried from several threads.
///
/// # Example
///
/// ```
/// use suffix_trie_rs::{Sequence, SuffixTrie};
///
/// let text: Sequence = "ACGT".parse().unwrap();
/// let trie = SuffixTrie::new(text);
///
/// assert_eq!(trie.locate("CGT").unwrap(), Some(1));
/// assert_eq!(trie.locate("GTA").unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTrie {
    /// Terminated text the edges point into
    pub(crate) text: Sequence,

    /// Storage for all nodes using generational indices
    pub(crate) nodes: SlotMap<DefaultKey, TrieNode>,

    /// Key of the root node
    pub(crate) root: DefaultKey,
}

impl SuffixTrie {
    /// Builds the trie and compresses it.
    pub fn new(text: Sequence) -> Self {
        let mut trie = Self::build(text);
        trie.compress();
        trie
    }

    /// Builds the uncompressed trie of every suffix of `text`, the lone terminator included.
    ///
    /// Every edge holds exactly one symbol. Costs O(n²) time and nodes.
    pub fn build(text: Sequence) -> Self {
        let mut nodes = SlotMap::new();
        let root = nodes.insert(TrieNode::root());

        let symbols = text.as_symbols();
        for origin in 0..symbols.len() {
            insert_suffix(&mut nodes, root, symbols, origin);
        }

        log::debug!(
            "built suffix trie: {} symbols, {} nodes",
            symbols.len(),
            nodes.len()
        );

        Self { text, nodes, root }
    }

    /// The text this trie indexes.
    pub fn text(&self) -> &Sequence {
        &self.text
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when no node other than the root has exactly one child.
    pub fn is_compressed(&self) -> bool {
        self.nodes
            .iter()
            .all(|(key, node)| key == self.root || node.child_count() != 1)
    }

    /// Returns structural statistics.
    pub fn stats(&self) -> TrieStats {
        let mut leaves = 0;
        let mut branches = 0;

        for node in self.nodes.values() {
            match node.child_count() {
                0 => leaves += 1,
                1 => {}
                _ => branches += 1,
            }
        }

        TrieStats {
            symbols: self.text.as_symbols().len(),
            nodes: self.nodes.len(),
            leaves,
            branches,
        }
    }

    /// The edge label leading into `key`.
    #[inline]
    pub(crate) fn edge(&self, key: DefaultKey) -> &[Symbol] {
        &self.text.as_symbols()[self.nodes[key].edge_range()]
    }

    /// First symbol of the edge leading into `key`.
    #[inline]
    pub(crate) fn first_symbol(&self, key: DefaultKey) -> Symbol {
        let node = &self.nodes[key];
        self.text.as_symbols()[node.origin + node.edge_start]
    }
}

/// Walks `text[origin..]` down from the root, creating one node per missing symbol.
fn insert_suffix(
    nodes: &mut SlotMap<DefaultKey, TrieNode>,
    root: DefaultKey,
    text: &[Symbol],
    origin: usize,
) {
    let mut current = root;

    for (offset, &symbol) in text[origin..].iter().enumerate() {
        current = match nodes[current].child(symbol) {
            Some(child) => child,
            None => {
                let child = nodes.insert(TrieNode::new(origin, offset, current));
                nodes[current].set_child(symbol, child);
                child
            }
        };
    }
}

/// Structural statistics about a trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieStats {
    /// Length of the indexed text, terminator included
    pub symbols: usize,
    /// Live nodes, root included
    pub nodes: usize,
    /// Nodes without children
    pub leaves: usize,
    /// Nodes with two or more children
    pub branches: usize,
}

impl TrieStats {
    /// Returns the number of nodes per indexed symbol.
    pub fn nodes_per_symbol(&self) -> f64 {
        if self.symbols == 0 {
            0.0
        } else {
            self.nodes as f64 / self.symbols as f64
        }
    }
}
