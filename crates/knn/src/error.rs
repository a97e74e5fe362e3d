//! Error types for the delphi-knn crate.

/// Error type for all fallible operations in the delphi-knn crate.
///
/// Every variant is a precondition failure detected before the per-row
/// classification loop starts; a failed call produces no partial predictions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnnError {
    /// Returned when training features and labels disagree on row count.
    #[error("training features have {features} rows but labels have {labels}")]
    RowCountMismatch {
        /// Row count of the training feature matrix.
        features: usize,
        /// Row count of the training label matrix.
        labels: usize,
    },

    /// Returned when train and test feature matrices disagree on column count.
    #[error("training features have {train} columns but test features have {test}")]
    ColumnCountMismatch {
        /// Column count of the training feature matrix.
        train: usize,
        /// Column count of the test feature matrix.
        test: usize,
    },

    /// Returned when the label matrix is not a single column.
    #[error("label matrix must have exactly 1 column, got {columns}")]
    LabelShape {
        /// Column count of the offending label matrix.
        columns: usize,
    },

    /// Returned when k is zero or exceeds the training row count.
    ///
    /// An empty training set lands here too: no k satisfies `1 <= k <= 0`.
    #[error("k must satisfy 1 <= k <= {n_train} training rows, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
        /// Number of training rows.
        n_train: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_row_count_mismatch() {
        let e = KnnError::RowCountMismatch {
            features: 10,
            labels: 9,
        };
        assert_eq!(
            e.to_string(),
            "training features have 10 rows but labels have 9"
        );
    }

    #[test]
    fn error_column_count_mismatch() {
        let e = KnnError::ColumnCountMismatch { train: 9, test: 4 };
        assert_eq!(
            e.to_string(),
            "training features have 9 columns but test features have 4"
        );
    }

    #[test]
    fn error_label_shape() {
        let e = KnnError::LabelShape { columns: 3 };
        assert_eq!(
            e.to_string(),
            "label matrix must have exactly 1 column, got 3"
        );
    }

    #[test]
    fn error_invalid_k() {
        let e = KnnError::InvalidK { k: 0, n_train: 50 };
        assert_eq!(
            e.to_string(),
            "k must satisfy 1 <= k <= 50 training rows, got 0"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
