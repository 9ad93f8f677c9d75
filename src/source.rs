//! Loading sequences from text files.

use crate::error::{Result, TrieError};
use crate::sequence::Sequence;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a sequence from a plain or FASTA-style text file.
///
/// Lines are trimmed and concatenated. Blank lines and `>` header lines are skipped.
pub fn read_sequence(path: impl AsRef<Path>) -> Result<Sequence> {
    let path = path.as_ref();
    let io_err = |source| TrieError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let bases = collect_bases(BufReader::new(file)).map_err(io_err)?;

    log::debug!("read {} bytes of sequence from {}", bases.len(), path.display());
    Sequence::from_bytes(&bases)
}

fn collect_bases<R: BufRead>(reader: R) -> std::io::Result<Vec<u8>> {
    let mut bases = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        bases.extend_from_slice(line.as_bytes());
    }
    Ok(bases)
}
