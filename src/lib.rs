//! # samfilter
//!
//! A small utility for extracting entries from a SAM file based on a list of
//! read ids.
//!
//! Given a text file with one read id per line and a SAM stream on stdin, it
//! writes to stdout every header line plus every alignment record whose read
//! id (the first tab/space-delimited field) appears in the list. The pass is
//! a single linear scan: the id list is loaded into a sorted, deduplicated
//! set once, then each input line is classified and either forwarded
//! immediately or dropped. Input order is preserved and forwarded lines are
//! never modified.
//!
//! ## Example
//!
//! ```rust
//! use samfilter::{filter_stream, ReadIdSet};
//! use std::io::Cursor;
//!
//! let ids = ReadIdSet::from_reader(Cursor::new("r2\nr1\nr1\n")).unwrap();
//! assert_eq!(ids.as_slice(), ["r1", "r2"]);
//!
//! let input = "@HD\thead\nr1\tfields\nr3\tfields\n";
//! let mut output = Vec::new();
//! let stats = filter_stream(&ids, Cursor::new(input), &mut output).unwrap();
//!
//! assert_eq!(output, b"@HD\thead\nr1\tfields\n");
//! assert_eq!(stats.matched, 1);
//! ```
//!
//! ## Modules
//!
//! - [`ids`]: Read id list loading into a sorted, deduplicated set
//! - [`filter`]: The single-pass line filter
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod filter;
pub mod ids;

// Re-export commonly used types for convenience
pub use filter::{filter_stream, FilterError, FilterStats};
pub use ids::{IdListError, ReadIdSet};
