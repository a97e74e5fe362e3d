//! Classification entry point and scratch buffer management.

use std::collections::BTreeMap;

use delphi_matrix::DenseMatrix;

use crate::distance::squared_euclidean;
use crate::error::KnnError;
use crate::neighbors::{offer, reset_candidates};
use crate::vote::{build_tally, reset_tally, winner};

/// Pre-allocated scratch buffers for classification.
///
/// Reuse across multiple calls to [`classify_with_scratch`] to avoid
/// repeated heap allocation when the same training set is queried many
/// times. The candidate buffer and vote tally are reset per test row, so no
/// state leaks between rows or between calls.
#[derive(Debug, Clone, Default)]
pub struct ClassifyScratch<L: Ord + Copy> {
    /// (distance, label) slots, ascending by distance, length k while in use.
    pub(crate) candidates: Vec<(f64, L)>,
    /// Vote counts keyed by every distinct training label.
    pub(crate) tally: BTreeMap<L, usize>,
}

impl<L: Ord + Copy> ClassifyScratch<L> {
    /// Creates an empty scratch buffer.
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            tally: BTreeMap::new(),
        }
    }
}

/// Validates shapes and k before any computation.
fn validate<L: Ord + Copy>(
    train_features: &DenseMatrix<f32>,
    train_labels: &DenseMatrix<L>,
    test_features: &DenseMatrix<f32>,
    k: usize,
) -> Result<(), KnnError> {
    if train_labels.columns() != 1 {
        return Err(KnnError::LabelShape {
            columns: train_labels.columns(),
        });
    }
    if train_features.rows() != train_labels.rows() {
        return Err(KnnError::RowCountMismatch {
            features: train_features.rows(),
            labels: train_labels.rows(),
        });
    }
    if train_features.columns() != test_features.columns() {
        return Err(KnnError::ColumnCountMismatch {
            train: train_features.columns(),
            test: test_features.columns(),
        });
    }
    let n_train = train_features.rows();
    if k == 0 || k > n_train {
        return Err(KnnError::InvalidK { k, n_train });
    }
    Ok(())
}

/// Internal implementation that assumes all inputs are validated.
fn classify_inner<L: Ord + Copy>(
    train_features: &DenseMatrix<f32>,
    train_labels: &DenseMatrix<L>,
    test_features: &DenseMatrix<f32>,
    k: usize,
    scratch: &mut ClassifyScratch<L>,
) -> Vec<L> {
    // Single-column matrix: the flat buffer is the labels in row order.
    let labels = train_labels.data();
    let n_train = train_features.rows();
    let n_test = test_features.rows();

    // Label domain is fixed across test rows; only the counts reset per row.
    build_tally(&mut scratch.tally, labels);

    // Sentinel label, displaced before voting since k <= n_train >= 1.
    let placeholder = labels[0];

    let mut predictions = Vec::with_capacity(n_test);
    for t in 0..n_test {
        let test_row = test_features.row(t);

        reset_candidates(&mut scratch.candidates, k, placeholder);
        reset_tally(&mut scratch.tally);

        // Index order matters: equal-distance ties resolve to the earlier
        // training row.
        for r in 0..n_train {
            let d = squared_euclidean(test_row, train_features.row(r));
            offer(&mut scratch.candidates, d, labels[r]);
        }

        for &(_, label) in scratch.candidates.iter() {
            // Every candidate label comes from the training domain built above.
            *scratch.tally.entry(label).or_insert(0) += 1;
        }

        // The tally is non-empty whenever n_train >= 1.
        let predicted = winner(&scratch.tally).unwrap_or(placeholder);
        predictions.push(predicted);
    }
    predictions
}

/// Classifies each test row by majority vote among its k nearest training
/// rows under squared Euclidean distance, allocating scratch internally.
///
/// Returns one predicted label per test row, in test-row order. An empty
/// test set yields an empty vector without error.
///
/// # Tie-breaking
///
/// Equal-distance candidates: a distance equal to the current worst slot
/// never displaces it, and the stable re-sort keeps insertion order among
/// equals, so the earlier training row wins the slot. Vote ties: the winner
/// scan walks labels in ascending order and replaces the incumbent only on a
/// strictly greater count, so the lowest-valued tied label wins. Both rules
/// are deliberate compatibility behavior, not accidents of container choice.
///
/// # Errors
///
/// Returns [`KnnError`] on shape mismatches or invalid k (see
/// [`KnnError`] variants); all checks run before any distance is computed,
/// so a failed call produces no partial output.
pub fn classify<L: Ord + Copy>(
    train_features: &DenseMatrix<f32>,
    train_labels: &DenseMatrix<L>,
    test_features: &DenseMatrix<f32>,
    k: usize,
) -> Result<Vec<L>, KnnError> {
    let mut scratch = ClassifyScratch::new();
    classify_with_scratch(train_features, train_labels, test_features, k, &mut scratch)
}

/// Classifies each test row, reusing pre-allocated scratch buffers.
///
/// Identical to [`classify`] but avoids per-call heap allocation by reusing
/// `scratch`. See [`ClassifyScratch`].
///
/// # Errors
///
/// Returns [`KnnError`] if inputs are invalid.
pub fn classify_with_scratch<L: Ord + Copy>(
    train_features: &DenseMatrix<f32>,
    train_labels: &DenseMatrix<L>,
    test_features: &DenseMatrix<f32>,
    k: usize,
    scratch: &mut ClassifyScratch<L>,
) -> Result<Vec<L>, KnnError> {
    validate(train_features, train_labels, test_features, k)?;
    Ok(classify_inner(
        train_features,
        train_labels,
        test_features,
        k,
        scratch,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(data: Vec<f32>, rows: usize, columns: usize) -> DenseMatrix<f32> {
        DenseMatrix::from_vec(data, rows, columns).unwrap()
    }

    fn labels(data: Vec<i64>) -> DenseMatrix<i64> {
        let rows = data.len();
        DenseMatrix::from_vec(data, rows, 1).unwrap()
    }

    // 1-feature training set, two well-separated clusters.
    fn two_cluster_train() -> (DenseMatrix<f32>, DenseMatrix<i64>) {
        (
            features(vec![0.0, 1.0, 10.0, 11.0], 4, 1),
            labels(vec![1, 1, 2, 2]),
        )
    }

    #[test]
    fn test_near_cluster_a_k2() {
        let (train_f, train_l) = two_cluster_train();
        let test_f = features(vec![0.5], 1, 1);
        let predictions = classify(&train_f, &train_l, &test_f, 2).unwrap();
        assert_eq!(predictions, vec![1]);
    }

    #[test]
    fn test_near_cluster_b_k3() {
        let (train_f, train_l) = two_cluster_train();
        let test_f = features(vec![10.5], 1, 1);
        // Nearest three: both 2-labelled rows (0.25 each) and the 1-labelled
        // row at 1.0 (90.25); votes 2 vs 1.
        let predictions = classify(&train_f, &train_l, &test_f, 3).unwrap();
        assert_eq!(predictions, vec![2]);
    }

    #[test]
    fn test_k_equals_n_train_global_majority() {
        let train_f = features(vec![0.0, 1.0, 10.0, 11.0, 12.0], 5, 1);
        let train_l = labels(vec![1, 1, 2, 2, 2]);
        // k = 5: candidate set is the whole training set, so the global
        // majority wins regardless of where the test point sits.
        let test_f = features(vec![0.0, 100.0], 2, 1);
        let predictions = classify(&train_f, &train_l, &test_f, 5).unwrap();
        assert_eq!(predictions, vec![2, 2]);
    }

    #[test]
    fn test_vote_tie_lowest_label_wins() {
        let (train_f, train_l) = two_cluster_train();
        // 5.5 is equidistant-ish: nearest two are one from each cluster.
        let test_f = features(vec![5.5], 1, 1);
        let predictions = classify(&train_f, &train_l, &test_f, 2).unwrap();
        assert_eq!(predictions, vec![1]);
    }

    #[test]
    fn test_empty_test_set() {
        let (train_f, train_l) = two_cluster_train();
        let test_f = features(vec![], 0, 1);
        let predictions = classify(&train_f, &train_l, &test_f, 2).unwrap();
        assert!(predictions.is_empty());
    }

    #[test]
    fn test_scratch_matches_allocating() {
        let (train_f, train_l) = two_cluster_train();
        let test_f = features(vec![0.5, 10.5, 5.5], 3, 1);
        let direct = classify(&train_f, &train_l, &test_f, 3).unwrap();
        let mut scratch = ClassifyScratch::new();
        let with_scratch =
            classify_with_scratch(&train_f, &train_l, &test_f, 3, &mut scratch).unwrap();
        assert_eq!(direct, with_scratch);
    }

    #[test]
    fn test_scratch_reuse_no_state_leak() {
        let (train_f, train_l) = two_cluster_train();
        let mut scratch = ClassifyScratch::new();

        let p1 = classify_with_scratch(
            &train_f,
            &train_l,
            &features(vec![0.5], 1, 1),
            2,
            &mut scratch,
        )
        .unwrap();
        assert_eq!(p1, vec![1]);

        // Second call with different k and a different training set.
        let other_l = labels(vec![7, 7, 7, 7]);
        let p2 = classify_with_scratch(
            &train_f,
            &other_l,
            &features(vec![10.5], 1, 1),
            4,
            &mut scratch,
        )
        .unwrap();
        assert_eq!(p2, vec![7]);
    }

    #[test]
    fn test_error_invalid_k_zero() {
        let (train_f, train_l) = two_cluster_train();
        let test_f = features(vec![0.5], 1, 1);
        let result = classify(&train_f, &train_l, &test_f, 0);
        assert!(matches!(
            result,
            Err(KnnError::InvalidK { k: 0, n_train: 4 })
        ));
    }

    #[test]
    fn test_error_k_exceeds_training_rows() {
        let (train_f, train_l) = two_cluster_train();
        let test_f = features(vec![0.5], 1, 1);
        let result = classify(&train_f, &train_l, &test_f, 5);
        assert!(matches!(
            result,
            Err(KnnError::InvalidK { k: 5, n_train: 4 })
        ));
    }

    #[test]
    fn test_error_empty_training_set() {
        let train_f = features(vec![], 0, 1);
        let train_l = labels(vec![]);
        let test_f = features(vec![0.5], 1, 1);
        let result = classify(&train_f, &train_l, &test_f, 1);
        assert!(matches!(
            result,
            Err(KnnError::InvalidK { k: 1, n_train: 0 })
        ));
    }

    #[test]
    fn test_error_row_count_mismatch() {
        let train_f = features(vec![0.0, 1.0, 2.0], 3, 1);
        let train_l = labels(vec![1, 2]);
        let test_f = features(vec![0.5], 1, 1);
        let result = classify(&train_f, &train_l, &test_f, 1);
        assert!(matches!(
            result,
            Err(KnnError::RowCountMismatch {
                features: 3,
                labels: 2
            })
        ));
    }

    #[test]
    fn test_error_column_count_mismatch() {
        let train_f = features(vec![0.0, 1.0, 2.0, 3.0], 2, 2);
        let train_l = labels(vec![1, 2]);
        let test_f = features(vec![0.5], 1, 1);
        let result = classify(&train_f, &train_l, &test_f, 1);
        assert!(matches!(
            result,
            Err(KnnError::ColumnCountMismatch { train: 2, test: 1 })
        ));
    }

    #[test]
    fn test_error_label_shape() {
        let train_f = features(vec![0.0, 1.0], 2, 1);
        let train_l = DenseMatrix::from_vec(vec![1_i64, 2, 3, 4], 2, 2).unwrap();
        let test_f = features(vec![0.5], 1, 1);
        let result = classify(&train_f, &train_l, &test_f, 1);
        assert!(matches!(result, Err(KnnError::LabelShape { columns: 2 })));
    }
}
