//! The single-pass SAM line filter.
//!
//! Streams input line by line, forwarding header lines unconditionally and
//! record lines whose first field is in the loaded [`ReadIdSet`]. Output is
//! written in input order with no buffering or transformation of line
//! content.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::ids::ReadIdSet;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("error reading alignment stream: {0}")]
    Read(std::io::Error),

    #[error("error writing output: {0}")]
    Write(std::io::Error),
}

/// Counters from a completed filter pass. Observational only; reported at
/// debug level and never affects the output bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Header lines forwarded.
    pub headers: u64,
    /// Record lines forwarded (id found in the set).
    pub matched: u64,
    /// Lines discarded (unmatched records, empty lines).
    pub dropped: u64,
}

/// Filter `input` against `ids`, writing matching lines to `output`.
///
/// For each line, in input order:
///
/// - a line starting with `@` is a header and is always forwarded;
/// - an empty line is neither header nor record and is dropped;
/// - otherwise the first ASCII-whitespace-delimited field is the read id,
///   and the line is forwarded only if the id is in `ids`.
///
/// Forwarded lines are written unchanged, newline-terminated, as soon as they
/// are classified.
///
/// # Errors
///
/// Returns `FilterError::Read` if reading `input` fails and
/// `FilterError::Write` if writing a forwarded line fails. Both are fatal to
/// the pass; lines already written stay written.
pub fn filter_stream<R: BufRead, W: Write>(
    ids: &ReadIdSet,
    input: R,
    mut output: W,
) -> Result<FilterStats, FilterError> {
    let mut stats = FilterStats::default();

    for line in input.lines() {
        let line = line.map_err(FilterError::Read)?;

        if line.starts_with('@') {
            writeln!(output, "{line}").map_err(FilterError::Write)?;
            stats.headers += 1;
            continue;
        }

        // split_ascii_whitespace yields no field for empty or all-whitespace
        // lines, so those fall through to the drop path.
        let matched = match line.split_ascii_whitespace().next() {
            Some(id) => ids.contains(id),
            None => false,
        };

        if matched {
            writeln!(output, "{line}").map_err(FilterError::Write)?;
            stats.matched += 1;
        } else {
            stats.dropped += 1;
        }
    }

    debug!(
        headers = stats.headers,
        matched = stats.matched,
        dropped = stats.dropped,
        "filter pass complete"
    );

    Ok(stats)
}
