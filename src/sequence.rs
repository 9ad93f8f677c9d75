use crate::error::{Result, TrieError};
use crate::symbol::Symbol;
use std::fmt;
use std::str::FromStr;

/// An immutable text buffer over the nucleotide alphabet.
///
/// The terminator is appended exactly once at construction and appears nowhere else,
/// so every suffix of the terminated text is distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Bases followed by a single `Symbol::Terminator`
    symbols: Vec<Symbol>,
}

impl Sequence {
    /// Validates `bytes` and appends the terminator.
    ///
    /// Fails on an empty input or on any byte outside `ACGT` (case-insensitive).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(TrieError::EmptySequence);
        }

        let mut symbols = Vec::with_capacity(bytes.len() + 1);
        symbols.extend(parse_bases(bytes)?);
        symbols.push(Symbol::Terminator);

        Ok(Self { symbols })
    }

    /// Builds a sequence from already-parsed bases.
    pub fn from_bases(bases: &[Symbol]) -> Result<Self> {
        if bases.is_empty() {
            return Err(TrieError::EmptySequence);
        }
        if let Some(position) = bases.iter().position(|&s| s == Symbol::Terminator) {
            return Err(TrieError::InvalidSymbol {
                symbol: Symbol::Terminator.as_char(),
                position,
            });
        }

        let mut symbols = Vec::with_capacity(bases.len() + 1);
        symbols.extend_from_slice(bases);
        symbols.push(Symbol::Terminator);

        Ok(Self { symbols })
    }

    /// Number of bases, terminator excluded.
    pub fn len(&self) -> usize {
        self.symbols.len() - 1
    }

    /// Always false; an empty sequence cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bases without the terminator.
    pub fn bases(&self) -> &[Symbol] {
        &self.symbols[..self.len()]
    }

    /// The full terminated text, as indexed by the trie.
    pub fn as_symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl FromStr for Sequence {
    type Err = TrieError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.bases() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Parses bases, reporting the first invalid byte with its position.
pub(crate) fn parse_bases(bytes: &[u8]) -> Result<Vec<Symbol>> {
    bytes
        .iter()
        .enumerate()
        .map(|(position, &byte)| {
            Symbol::from_byte(byte).ok_or(TrieError::InvalidSymbol {
                symbol: char::from(byte),
                position,
            })
        })
        .collect()
}
