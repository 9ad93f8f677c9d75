use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use suffix_trie_rs::{read_sequence, similarity, SuffixTrie};

/// Locate queries in a nucleotide sequence with a compressed suffix trie
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose/info output (default: warnings only)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Trace output
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the index for a text file and locate each query in it
    Locate {
        /// Text file holding the sequence to index
        text: PathBuf,

        /// Queries to locate
        #[arg(required = true)]
        queries: Vec<String>,

        /// Print index statistics after building
        #[arg(long)]
        stats: bool,
    },

    /// Find the longest aligned run shared by two sequences
    Similarity {
        /// First sequence file
        first: PathBuf,

        /// Second sequence file
        second: PathBuf,

        /// Where to write the matched run (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.trace {
        "trace"
    } else if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Command::Locate {
            text,
            queries,
            stats,
        } => run_locate(&text, &queries, stats),
        Command::Similarity {
            first,
            second,
            output,
        } => run_similarity(&first, &second, output.as_deref()),
    }
}

fn run_locate(path: &Path, queries: &[String], show_stats: bool) -> Result<()> {
    let sequence = read_sequence(path)
        .with_context(|| format!("Failed to load sequence from {}", path.display()))?;
    info!("indexing {} bases from {}", sequence.len(), path.display());

    let trie = SuffixTrie::new(sequence);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if show_stats {
        let stats = trie.stats();
        writeln!(
            out,
            "symbols: {}\tnodes: {}\tleaves: {}\tbranches: {}\tnodes/symbol: {:.2}",
            stats.symbols,
            stats.nodes,
            stats.leaves,
            stats.branches,
            stats.nodes_per_symbol()
        )?;
    }

    let invalid = write_answers(&trie, queries, &mut out, &mut io::stderr().lock())?;
    out.flush()?;

    if invalid > 0 {
        bail!("{invalid} of {} queries were invalid", queries.len());
    }
    Ok(())
}

/// Answers every query in order. Invalid queries go to `err` and do not stop the run.
///
/// Returns the number of invalid queries.
fn write_answers<W: Write, E: Write>(
    trie: &SuffixTrie,
    queries: &[String],
    out: &mut W,
    err: &mut E,
) -> io::Result<usize> {
    let mut invalid = 0;
    for query in queries {
        match trie.locate(query) {
            Ok(Some(offset)) => writeln!(out, "{query}\t{offset}")?,
            Ok(None) => writeln!(out, "{query}\tnot found")?,
            Err(e) => {
                invalid += 1;
                writeln!(err, "{query}\tinvalid: {e}")?;
            }
        }
    }
    Ok(invalid)
}

fn run_similarity(first: &Path, second: &Path, output: Option<&Path>) -> Result<()> {
    let first_seq = read_sequence(first)
        .with_context(|| format!("Failed to load sequence from {}", first.display()))?;
    let second_seq = read_sequence(second)
        .with_context(|| format!("Failed to load sequence from {}", second.display()))?;

    let result = similarity(&first_seq, &second_seq);
    info!(
        "longest aligned run: {} of {} bases",
        result.run.len(),
        first_seq.len().max(second_seq.len())
    );

    println!("{}", result.ratio);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{result}")?;
            writer.flush()?;
        }
        None => println!("{result}"),
    }

    Ok(())
}
