//! Read identifier list loading.
//!
//! A read id list is a plain text file with one identifier per line. Loading
//! produces a [`ReadIdSet`]: a sorted, deduplicated sequence supporting
//! binary-search membership tests during the filter pass.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum IdListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("id list is empty")]
    Empty,
}

/// A sorted, deduplicated set of read identifiers.
///
/// Built once at startup and immutable thereafter. Ordering is
/// byte-lexicographic, so [`ReadIdSet::contains`] can binary search.
#[derive(Debug, Clone)]
pub struct ReadIdSet {
    ids: Vec<String>,
}

impl ReadIdSet {
    /// Load a read id list from a file, one identifier per line.
    ///
    /// Lines are kept verbatim apart from the stripped line terminator; no
    /// trimming beyond that.
    ///
    /// # Errors
    ///
    /// Returns `IdListError::Io` if the file cannot be opened or a read fails
    /// mid-stream, or `IdListError::Empty` if the file contains no lines.
    pub fn from_path(path: &Path) -> Result<Self, IdListError> {
        let reader = File::open(path).map(BufReader::new)?;
        let set = Self::from_reader(reader)?;
        debug!(
            path = %path.display(),
            count = set.len(),
            "loaded read id list"
        );
        Ok(set)
    }

    /// Build a set from any line source.
    ///
    /// # Errors
    ///
    /// Returns `IdListError::Io` on a read failure or `IdListError::Empty` if
    /// the source yields no lines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IdListError> {
        let mut ids = reader.lines().collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Err(IdListError::Empty);
        }

        ids.sort_unstable();
        ids.dedup();

        Ok(Self { ids })
    }

    /// Test whether `id` is in the set, using the same byte-lexicographic
    /// ordering the set was sorted with.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.binary_search_by(|probe| probe.as_str().cmp(id)).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The identifiers in sorted order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_sorts_and_dedups() {
        let set = ReadIdSet::from_reader(Cursor::new("b\na\na\nc\n")).unwrap();
        assert_eq!(set.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let set = ReadIdSet::from_reader(Cursor::new("x\nx\nx\n")).unwrap();
        assert_eq!(set.as_slice(), ["x"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_strictly_increasing_invariant() {
        let set = ReadIdSet::from_reader(Cursor::new("r10\nr2\nr1\nr2\nr10\n")).unwrap();
        for pair in set.as_slice().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_empty_source_is_an_error() {
        let result = ReadIdSet::from_reader(Cursor::new(""));
        assert!(matches!(result, Err(IdListError::Empty)));
    }

    #[test]
    fn test_blank_lines_are_kept() {
        // Reference behavior: a blank line is an (empty) identifier, not an
        // error. It can never match a record field, which is never empty.
        let set = ReadIdSet::from_reader(Cursor::new("\nr1\n")).unwrap();
        assert_eq!(set.as_slice(), ["", "r1"]);
    }

    #[test]
    fn test_contains() {
        let set = ReadIdSet::from_reader(Cursor::new("r2\nr1\nr1\n")).unwrap();
        assert!(set.contains("r1"));
        assert!(set.contains("r2"));
        assert!(!set.contains("r3"));
        assert!(!set.contains(""));
        assert!(!set.contains("r1 ")); // exact match only
    }

    #[test]
    fn test_read_error_mid_stream_is_io_error() {
        struct FailingReader;
        impl std::io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("stream broken"))
            }
        }
        impl BufRead for FailingReader {
            fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
                Err(std::io::Error::other("stream broken"))
            }
            fn consume(&mut self, _: usize) {}
        }

        let result = ReadIdSet::from_reader(FailingReader);
        assert!(matches!(result, Err(IdListError::Io(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ReadIdSet::from_path(Path::new("/nonexistent/read_ids.txt"));
        assert!(matches!(result, Err(IdListError::Io(_))));
    }
}
