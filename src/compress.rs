use crate::trie::SuffixTrie;
use slotmap::DefaultKey;

impl SuffixTrie {
    /// Collapses single-child chains in place.
    ///
    /// Post-order: a node is examined only after all of its children. A non-root node
    /// with exactly one child is removed and its child takes over both its slot in the
    /// grandparent and the start of its edge. The root is never spliced, even when it is
    /// left with a single child. Calling this on a compressed trie changes nothing.
    pub fn compress(&mut self) {
        let before = self.nodes.len();
        let mut stack = vec![(self.root, false)];

        while let Some((key, visited)) = stack.pop() {
            if !visited {
                stack.push((key, true));
                stack.extend(self.nodes[key].children().map(|child| (child, false)));
            } else if key != self.root {
                self.splice(key);
            }
        }

        log::debug!(
            "compressed suffix trie: {} splices, {} nodes remain",
            before - self.nodes.len(),
            self.nodes.len()
        );
    }

    /// Removes `key` if it has exactly one child and a parent.
    ///
    /// Returns true if the node was spliced out.
    pub(crate) fn splice(&mut self, key: DefaultKey) -> bool {
        let Some(child) = self.nodes[key].only_child() else {
            return false;
        };
        let Some(parent) = self.nodes[key].parent else {
            return false;
        };

        let first = self.first_symbol(key);
        let Some(node) = self.nodes.remove(key) else {
            return false;
        };

        // Unary chains come from a single suffix, so the child's offsets already
        // address the same occurrence and its edge continues where ours ends.
        debug_assert_eq!(node.origin, self.nodes[child].origin);
        debug_assert_eq!(node.edge_end + 1, self.nodes[child].edge_start);

        let merged = &mut self.nodes[child];
        merged.edge_start = node.edge_start;
        merged.parent = Some(parent);

        self.nodes[parent].replace_child(first, key, child);
        true
    }
}
