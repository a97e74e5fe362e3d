//! Delimited text reader configuration and parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use delphi_matrix::DenseMatrix;
use tracing::{debug, info};

use crate::error::IoError;

/// Configuration for reading a delimited text dataset.
///
/// Use the builder methods (`with_*`) to customise the delimiter, header
/// handling, and the placeholder substituted for unparsable cells. The
/// [`Default`] implementation reads comma-separated, headerless files — the
/// shape of the UCI-style `.data` files this pipeline was built around,
/// where missing values appear as `?`.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Field delimiter.
    delimiter: char,
    /// Whether the first line is a header to skip.
    has_header: bool,
    /// Value substituted for any cell that fails to parse as numeric.
    placeholder: f32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: false,
            placeholder: 0.0,
        }
    }
}

impl ReaderConfig {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the first line is a header to skip.
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the placeholder value for unparsable cells.
    pub fn with_placeholder(mut self, placeholder: f32) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns whether the first line is treated as a header.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Returns the placeholder value.
    pub fn placeholder(&self) -> f32 {
        self.placeholder
    }
}

/// Reads a delimited text file into a row-major `f32` matrix.
///
/// One matrix row per data line; the first data row fixes the column count.
/// Cells are trimmed before parsing; any cell that fails to parse as a
/// number (for example the `?` markers in UCI datasets) becomes
/// `config.placeholder()`. Blank lines are skipped.
///
/// # Errors
///
/// * [`IoError::FileNotFound`] — `path` does not exist.
/// * [`IoError::Read`] — the file could not be opened or read.
/// * [`IoError::RaggedRow`] — a row's field count differs from the first
///   data row's.
/// * [`IoError::EmptyFile`] — no data rows (headers and blank lines do not
///   count).
pub fn read_delimited(path: &Path, config: &ReaderConfig) -> Result<DenseMatrix<f32>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let reader = BufReader::new(file);

    let mut data: Vec<f32> = Vec::new();
    let mut rows = 0_usize;
    let mut columns = 0_usize;
    let mut substituted = 0_usize;

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| IoError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if line_idx == 0 && config.has_header {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let fields = line.split(config.delimiter);
        let mut got = 0_usize;
        for cell in fields {
            let value = match cell.trim().parse::<f32>() {
                Ok(v) => v,
                Err(_) => {
                    substituted += 1;
                    config.placeholder
                }
            };
            data.push(value);
            got += 1;
        }

        if columns == 0 {
            columns = got;
            debug!(columns, "column count fixed by first data row");
        } else if got != columns {
            return Err(IoError::RaggedRow {
                line: line_idx + 1,
                expected: columns,
                got,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(IoError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    info!(
        path = %path.display(),
        rows,
        columns,
        substituted,
        "loaded delimited dataset"
    );

    // data.len() == rows * columns by construction; from_vec re-checks.
    DenseMatrix::from_vec(data, rows, columns).map_err(|e| IoError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
