use crate::error::{Result, TrieError};
use crate::sequence::parse_bases;
use crate::trie::SuffixTrie;

impl SuffixTrie {
    /// Finds an offset at which `query` occurs in the text.
    ///
    /// Returns `Ok(None)` when the query does not occur. Among several occurrences the one
    /// returned is whichever suffix first created the edge where the match ends; no
    /// leftmost guarantee is made. An empty query, or one containing a symbol outside
    /// `ACGT`, is an error.
    ///
    /// Runs in O(|query|).
    pub fn locate(&self, query: impl AsRef<[u8]>) -> Result<Option<usize>> {
        let query = query.as_ref();
        if query.is_empty() {
            return Err(TrieError::EmptyQuery);
        }
        let query = parse_bases(query)?;

        let mut node = self.root;
        let mut matched = 0;

        while matched < query.len() {
            let Some(child) = self.nodes[node].child(query[matched]) else {
                log::trace!("no edge for {} after {} symbols", query[matched], matched);
                return Ok(None);
            };

            for &symbol in self.edge(child) {
                if matched == query.len() {
                    break;
                }
                if symbol != query[matched] {
                    log::trace!("mismatch inside edge after {} symbols", matched);
                    return Ok(None);
                }
                matched += 1;
            }
            node = child;
        }

        Ok(Some(self.nodes[node].origin))
    }

    /// Returns true if `query` occurs in the text.
    pub fn contains(&self, query: impl AsRef<[u8]>) -> Result<bool> {
        Ok(self.locate(query)?.is_some())
    }
}
