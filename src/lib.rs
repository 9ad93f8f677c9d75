//! # Compressed Suffix Trie
//!
//! A locate index over a single nucleotide sequence.
//!
//! Every suffix of the text (with a terminator appended) is inserted into a trie one
//! symbol per edge, then single-child chains are collapsed in place so the trie keeps
//! one leaf per suffix and only branching nodes inside. Edges address the retained
//! text by offset instead of copying it.
//!
//! ## Example
//!
//! ```
//! use suffix_trie_rs::{Sequence, SuffixTrie};
//!
//! let text: Sequence = "GATTACA".parse().unwrap();
//! let trie = SuffixTrie::new(text);
//!
//! assert_eq!(trie.locate("TTA").unwrap(), Some(2));
//! assert_eq!(trie.locate("TAG").unwrap(), None);
//! assert!(trie.is_compressed());
//! ```
//!
//! ## Performance
//!
//! - Construction is O(n²) in time and transient nodes; compression is linear in that
//! - Locating a query costs O(|query|)
//! - Nodes live in a `SlotMap`, so splicing frees storage without dangling references

mod compress;
mod error;
mod locate;
mod node;
mod sequence;
mod similarity;
mod source;
mod symbol;
mod trie;

#[cfg(test)]
mod tests;

pub use error::{Result, TrieError};
pub use sequence::Sequence;
pub use similarity::{similarity, Similarity};
pub use source::read_sequence;
pub use symbol::{Symbol, ALPHABET_SIZE};
pub use trie::{SuffixTrie, TrieStats};
