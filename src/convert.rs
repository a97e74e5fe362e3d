//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use delphi_io::ReaderConfig;
use delphi_matrix::DenseMatrix;

use crate::config::{IoToml, KnnToml};

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    let mut chars = io.delimiter.chars();
    let delimiter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => bail!("delimiter must be a single character, got {:?}", io.delimiter),
    };
    Ok(ReaderConfig::default()
        .with_delimiter(delimiter)
        .with_has_header(io.has_header)
        .with_placeholder(io.placeholder))
}

/// Resolves the feature column list and label column from the TOML KNN
/// configuration against the actual column count of the loaded dataset.
///
/// Defaults: label is the last column, features are every other column.
pub fn resolve_columns(knn: &KnnToml, total_columns: usize) -> Result<(Vec<usize>, usize)> {
    if total_columns == 0 {
        bail!("dataset has no columns");
    }

    let label_column = knn.label_column.unwrap_or(total_columns - 1);
    if label_column >= total_columns {
        bail!(
            "label column {label_column} out of range for {total_columns} columns"
        );
    }

    let feature_columns = match &knn.feature_columns {
        Some(cols) => {
            if cols.is_empty() {
                bail!("feature_columns must not be empty");
            }
            for &c in cols {
                if c >= total_columns {
                    bail!("feature column {c} out of range for {total_columns} columns");
                }
                if c == label_column {
                    bail!("feature column {c} is also the label column");
                }
            }
            cols.clone()
        }
        None => (0..total_columns).filter(|&c| c != label_column).collect(),
    };

    if feature_columns.is_empty() {
        bail!("no feature columns remain after excluding the label column");
    }

    Ok((feature_columns, label_column))
}

/// Converts a single-column `f32` label matrix into integer labels.
///
/// UCI-style datasets store integer class codes that parse as floating
/// point; each cell is rounded to the nearest integer so `2.0` and `4.0`
/// become the exact keys `2` and `4`.
pub fn labels_to_i64(labels: &DenseMatrix<f32>) -> Result<DenseMatrix<i64>> {
    let data: Vec<i64> = labels.data().iter().map(|&v| v.round() as i64).collect();
    DenseMatrix::from_vec(data, labels.rows(), labels.columns())
        .map_err(|e| anyhow::anyhow!("label matrix conversion failed: {e}"))
}
