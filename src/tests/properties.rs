use crate::sequence::Sequence;
use crate::symbol::Symbol;
use crate::error::TrieError;
use crate::trie::SuffixTrie;
use ahash::AHashSet;
use slotmap::DefaultKey;
use proptest::prelude::*;

/// Random non-empty texts over the four bases.
fn bases(max_len: usize) -> impl Strategy<Value = Vec<Symbol>> {
    prop::collection::vec(prop::sample::select(Symbol::BASES.to_vec()), 1..max_len)
}

fn as_query(symbols: &[Symbol]) -> Vec<u8> {
    symbols.iter().map(|s| s.as_char() as u8).collect()
}

fn naive_contains(text: &[Symbol], query: &[Symbol]) -> bool {
    text.windows(query.len()).any(|w| w == query)
}

/// Asserts that `offset` starts an occurrence of `query` in `text`.
fn occurs_at(text: &[Symbol], offset: usize, query: &[Symbol]) -> bool {
    text.get(offset..offset + query.len()) == Some(query)
}

/// Spells the path from the root down to `key`.
fn spell_path(trie: &SuffixTrie, key: DefaultKey) -> Vec<Symbol> {
    let mut chain = Vec::new();
    let mut current = key;
    while let Some(parent) = trie.nodes[current].parent {
        chain.push(current);
        current = parent;
    }
    chain
        .iter()
        .rev()
        .flat_map(|&k| trie.edge(k).iter().copied())
        .collect()
}

proptest! {
    /// Property 1: Every suffix is located at an offset where it actually occurs.
    #[test]
    fn prop_every_suffix_located(input in bases(48)) {
        let trie = SuffixTrie::new(Sequence::from_bases(&input).unwrap());

        for i in 0..input.len() {
            let suffix = &input[i..];
            let offset = trie.locate(as_query(suffix)).unwrap();
            prop_assert!(offset.is_some(), "suffix at {} not found", i);
            prop_assert!(occurs_at(&input, offset.unwrap(), suffix));
        }
    }

    /// Property 2: Every substring (every proper prefix of a suffix) is located correctly.
    #[test]
    fn prop_every_substring_located(input in bases(24)) {
        let trie = SuffixTrie::new(Sequence::from_bases(&input).unwrap());

        for i in 0..input.len() {
            for j in (i + 1)..=input.len() {
                let query = &input[i..j];
                let offset = trie.locate(as_query(query)).unwrap();
                prop_assert!(offset.is_some());
                prop_assert!(occurs_at(&input, offset.unwrap(), query));
            }
        }
    }

    /// Property 3: Queries that do not occur are reported as not found.
    #[test]
    fn prop_absent_not_found(input in bases(32), query in bases(8)) {
        let trie = SuffixTrie::new(Sequence::from_bases(&input).unwrap());
        let located = trie.locate(as_query(&query)).unwrap();
        prop_assert_eq!(located.is_some(), naive_contains(&input, &query));
    }

    /// Property 4: No node other than the root has exactly one child after compression.
    #[test]
    fn prop_compact(input in bases(64)) {
        let trie = SuffixTrie::new(Sequence::from_bases(&input).unwrap());
        for (key, node) in &trie.nodes {
            if key != trie.root {
                prop_assert_ne!(node.child_count(), 1);
            }
        }
        prop_assert!(trie.is_compressed());
    }

    /// Property 5: Compressing twice changes nothing.
    #[test]
    fn prop_idempotent(input in bases(48)) {
        let mut trie = SuffixTrie::new(Sequence::from_bases(&input).unwrap());
        let snapshot: Vec<_> = trie
            .nodes
            .iter()
            .map(|(key, n)| (key, n.origin, n.edge_start, n.edge_end, n.children, n.parent))
            .collect();

        trie.compress();

        let again: Vec<_> = trie
            .nodes
            .iter()
            .map(|(key, n)| (key, n.origin, n.edge_start, n.edge_end, n.children, n.parent))
            .collect();
        prop_assert_eq!(snapshot, again);
    }

    /// Property 6: One leaf per suffix, and the compact trie stays linear in size.
    #[test]
    fn prop_leaf_per_suffix(input in bases(64)) {
        let trie = SuffixTrie::new(Sequence::from_bases(&input).unwrap());
        let stats = trie.stats();
        prop_assert_eq!(stats.leaves, stats.symbols);
        prop_assert!(stats.nodes < 2 * stats.symbols);
    }

    /// Property 7: After compression each leaf still spells exactly its own suffix.
    #[test]
    fn prop_compressed_leaves_spell_suffixes(input in bases(60)) {
        let trie = SuffixTrie::new(Sequence::from_bases(&input).unwrap());
        let text = trie.text().as_symbols();

        let mut origins = Vec::new();
        for (key, node) in &trie.nodes {
            if key == trie.root || !node.is_leaf() {
                continue;
            }
            let label = spell_path(&trie, key);
            prop_assert_eq!(label.last(), Some(&Symbol::Terminator));
            prop_assert_eq!(label.as_slice(), &text[node.origin..]);
            origins.push(node.origin);
        }

        origins.sort_unstable();
        prop_assert_eq!(origins, (0..text.len()).collect::<Vec<_>>());
    }

    /// Property 8: Edges stay inside the text and children match their slot.
    #[test]
    fn prop_edges_well_formed(input in bases(48)) {
        let trie = SuffixTrie::new(Sequence::from_bases(&input).unwrap());
        let len = trie.text().as_symbols().len();

        for (key, node) in &trie.nodes {
            if key == trie.root {
                continue;
            }
            prop_assert!(node.edge_start <= node.edge_end);
            prop_assert!(node.origin + node.edge_end < len);
            for (slot, child) in node.children.iter().enumerate() {
                if let Some(child) = child {
                    prop_assert_eq!(trie.first_symbol(*child).slot(), slot);
                    prop_assert_eq!(trie.nodes[*child].parent, Some(key));
                }
            }
        }
    }

    /// Property 9: Compression does not change query answers' validity.
    #[test]
    fn prop_build_and_compressed_agree(input in bases(24), query in bases(6)) {
        let raw = SuffixTrie::build(Sequence::from_bases(&input).unwrap());
        let compact = SuffixTrie::new(Sequence::from_bases(&input).unwrap());
        let q = as_query(&query);
        prop_assert_eq!(raw.locate(&q).unwrap().is_some(), compact.locate(&q).unwrap().is_some());
    }
}

/// Bolero fuzz test: arbitrary bytes mapped onto the alphabet never panic and agree
/// with a naive scan.
#[test]
fn fuzz_locate_matches_naive() {
    bolero::check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(text, query)| {
            let text: Vec<Symbol> = text
                .iter()
                .take(64)
                .map(|b| Symbol::BASES[(*b % 4) as usize])
                .collect();
            let query: Vec<Symbol> = query
                .iter()
                .take(8)
                .map(|b| Symbol::BASES[(*b % 4) as usize])
                .collect();

            let Ok(sequence) = Sequence::from_bases(&text) else {
                assert!(text.is_empty());
                return;
            };
            let trie = SuffixTrie::new(sequence);

            if query.is_empty() {
                assert!(trie.locate(as_query(&query)).is_err());
                return;
            }

            match trie.locate(as_query(&query)).unwrap() {
                Some(offset) => assert!(occurs_at(&text, offset, &query)),
                None => assert!(!naive_contains(&text, &query)),
            }
        });
}

/// Bolero fuzz test: raw bytes as a query are either rejected at the first bad byte
/// or answered consistently with a naive scan.
#[test]
fn fuzz_raw_byte_queries() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        if let Ok(sequence) = Sequence::from_bytes(&input[..input.len().min(64)]) {
            let text = sequence.bases().to_vec();
            let trie = SuffixTrie::new(sequence);
            assert!(trie.is_compressed());

            match input.iter().position(|&b| Symbol::from_byte(b).is_none()) {
                Some(position) => assert!(matches!(
                    trie.locate(input),
                    Err(TrieError::InvalidSymbol { position: p, .. }) if p == position
                )),
                None => {
                    let query: Vec<Symbol> =
                        input.iter().filter_map(|&b| Symbol::from_byte(b)).collect();
                    match trie.locate(input).unwrap() {
                        Some(offset) => assert!(occurs_at(&text, offset, &query)),
                        None => assert!(!naive_contains(&text, &query)),
                    }
                }
            }
        }
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_short_queries_against_substring_set() {
        let text: Sequence = "ACCGTTGACAGT".parse().unwrap();
        let bases = text.bases().to_vec();
        let trie = SuffixTrie::new(text);

        let mut present = AHashSet::new();
        for len in 1..=3 {
            for window in bases.windows(len) {
                present.insert(window.to_vec());
            }
        }

        let mut queries: Vec<Vec<Symbol>> = vec![Vec::new()];
        for _ in 0..3 {
            queries = queries
                .iter()
                .flat_map(|q| {
                    Symbol::BASES.iter().map(move |&s| {
                        let mut next = q.clone();
                        next.push(s);
                        next
                    })
                })
                .collect();

            for query in &queries {
                let found = trie.locate(as_query(query)).unwrap();
                assert_eq!(found.is_some(), present.contains(query), "query {query:?}");
                if let Some(offset) = found {
                    assert!(occurs_at(&bases, offset, query));
                }
            }
        }
    }
}
