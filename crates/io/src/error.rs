//! Error types for delphi-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the delphi-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying read failure.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path being read when the failure occurred.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a row has a different field count than the first row.
    #[error("line {line}: expected {expected} fields, got {got}")]
    RaggedRow {
        /// 1-based line number of the offending row.
        line: usize,
        /// Field count established by the first data row.
        expected: usize,
        /// Field count actually found.
        got: usize,
    },

    /// Returned when the file contains no data rows.
    #[error("no data rows in {}", path.display())]
    EmptyFile {
        /// Path to the empty input.
        path: PathBuf,
    },
}
