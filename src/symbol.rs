use std::fmt;

/// Number of distinct symbols, terminator included.
pub const ALPHABET_SIZE: usize = 5;

/// A symbol of the fixed nucleotide alphabet.
///
/// `Terminator` never comes from input; it is appended once to every [`Sequence`](crate::Sequence)
/// so each suffix ends on its own leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    Terminator = 4,
}

impl Symbol {
    /// All bases, terminator excluded.
    pub const BASES: [Symbol; 4] = [Symbol::A, Symbol::C, Symbol::G, Symbol::T];

    /// Parses a base. Lowercase is accepted; the terminator character is not.
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Symbol::A),
            b'C' | b'c' => Some(Symbol::C),
            b'G' | b'g' => Some(Symbol::G),
            b'T' | b't' => Some(Symbol::T),
            _ => None,
        }
    }

    /// Index of the child slot this symbol selects.
    #[inline(always)]
    pub const fn slot(self) -> usize {
        self as usize
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::C => 'C',
            Symbol::G => 'G',
            Symbol::T => 'T',
            Symbol::Terminator => '$',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
