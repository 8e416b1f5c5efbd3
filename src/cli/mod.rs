//! Command-line interface for samfilter.
//!
//! The tool takes the read id list as its only positional argument and works
//! as a classic stdin/stdout filter:
//!
//! ```text
//! # Keep only the reads named in read_ids.txt
//! samfilter read_ids.txt < input.sam > output.sam
//!
//! # Pipe from samtools
//! samtools view -h sample.bam | samfilter read_ids.txt > subset.sam
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::filter::filter_stream;
use crate::ids::ReadIdSet;

#[derive(Parser)]
#[command(name = "samfilter")]
#[command(version)]
#[command(about = "Filter a SAM stream by a list of read identifiers")]
#[command(override_usage = "samfilter <read_ids.txt> < input.sam > output.sam")]
#[command(
    long_about = "samfilter extracts entries from a SAM file based on a list of read ids.\n\nIt expects the id list (one read id per line) as its only argument and the source SAM file on stdin. Header lines are passed through untouched; alignment records are kept only when their read id appears in the list. The filtered SAM file is written to stdout."
)]
pub struct Cli {
    /// Text file with one read id per line
    #[arg(value_name = "read_ids.txt", required = true)]
    pub read_ids: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute the filter pass: load the id list, then stream stdin to stdout.
///
/// # Errors
///
/// Returns an error if the id list cannot be loaded (missing, unreadable, or
/// empty) or if reading stdin or writing stdout fails.
pub fn run(args: &Cli) -> anyhow::Result<()> {
    let ids = ReadIdSet::from_path(&args.read_ids).with_context(|| {
        format!("failed to load read id list '{}'", args.read_ids.display())
    })?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let stats = filter_stream(&ids, stdin, stdout)?;

    if args.verbose {
        eprintln!(
            "{} headers, {} records kept, {} lines dropped ({} ids in list)",
            stats.headers,
            stats.matched,
            stats.dropped,
            ids.len(),
        );
    }

    Ok(())
}
