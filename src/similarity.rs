//! Brute-force similarity between two sequences.

use crate::sequence::Sequence;
use crate::symbol::Symbol;
use std::fmt;

/// Result of [`similarity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity<'a> {
    /// Length of `run` divided by the length of the longer sequence
    pub ratio: f64,
    /// The longest aligned matching run, borrowed from the longer sequence
    pub run: &'a [Symbol],
}

impl fmt::Display for Similarity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.run {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Finds the longest run of position-aligned matching bases over every relative
/// alignment of the two sequences.
///
/// The ratio is taken against the longer sequence; on equal lengths `first` counts
/// as the longer one. Ties keep the first run found. Costs O(n·m).
pub fn similarity<'a>(first: &'a Sequence, second: &'a Sequence) -> Similarity<'a> {
    let (longer, shorter) = if first.len() < second.len() {
        (second.bases(), first.bases())
    } else {
        (first.bases(), second.bases())
    };
    let (n, m) = (longer.len(), shorter.len());

    let mut best_len = 0;
    let mut best_end = 0;

    // Diagonal d pairs longer[i] with shorter[i + m - 1 - d]
    for diagonal in 0..(n + m - 1) {
        let (mut i, mut j) = if diagonal < m {
            (0, m - 1 - diagonal)
        } else {
            (diagonal + 1 - m, 0)
        };

        let mut run = 0;
        while i < n && j < m {
            if longer[i] == shorter[j] {
                run += 1;
                if run > best_len {
                    best_len = run;
                    best_end = i + 1;
                }
            } else {
                run = 0;
            }
            i += 1;
            j += 1;
        }
    }

    Similarity {
        ratio: best_len as f64 / n as f64,
        run: &longer[best_end - best_len..best_end],
    }
}
