//! Error types for the delphi-matrix crate.

/// Error type for all fallible operations in the delphi-matrix crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MatrixError {
    /// Returned when a backing buffer length does not equal rows × columns.
    #[error("buffer length {len} does not equal {rows} rows x {columns} columns")]
    ShapeMismatch {
        /// Length of the backing buffer.
        len: usize,
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },

    /// Returned when a row index is out of range.
    #[error("row index {index} out of range for {rows} rows")]
    RowOutOfBounds {
        /// The offending row index.
        index: usize,
        /// Number of rows in the matrix.
        rows: usize,
    },

    /// Returned when a column index is out of range.
    #[error("column index {index} out of range for {columns} columns")]
    ColumnOutOfBounds {
        /// The offending column index.
        index: usize,
        /// Number of columns in the matrix.
        columns: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_shape_mismatch() {
        let e = MatrixError::ShapeMismatch {
            len: 5,
            rows: 2,
            columns: 3,
        };
        assert_eq!(
            e.to_string(),
            "buffer length 5 does not equal 2 rows x 3 columns"
        );
    }

    #[test]
    fn error_row_out_of_bounds() {
        let e = MatrixError::RowOutOfBounds { index: 7, rows: 4 };
        assert_eq!(e.to_string(), "row index 7 out of range for 4 rows");
    }

    #[test]
    fn error_column_out_of_bounds() {
        let e = MatrixError::ColumnOutOfBounds {
            index: 3,
            columns: 3,
        };
        assert_eq!(e.to_string(), "column index 3 out of range for 3 columns");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<MatrixError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MatrixError>();
    }
}
