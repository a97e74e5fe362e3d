//! Seeded train/test partitioning of row indices.
//!
//! Produces two disjoint ordered index lists from a total row count, a train
//! fraction, and a seed. The permutation is a Fisher–Yates shuffle driven by
//! a seeded [`StdRng`], so the same inputs always produce the same split and
//! any downstream classification run is reproducible.
//!
//! ```
//! use delphi_split::train_test_indices;
//!
//! let split = train_test_indices(10, 0.7, 6667).unwrap();
//! assert_eq!(split.train().len(), 7);
//! assert_eq!(split.test().len(), 3);
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Error type for all fallible operations in the delphi-split crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SplitError {
    /// Returned when the train fraction is non-finite or outside `[0, 1]`.
    #[error("train fraction must be in [0, 1], got {fraction}")]
    InvalidFraction {
        /// The invalid fraction value.
        fraction: f64,
    },
}

/// Disjoint train and test row-index lists covering `0..n_samples`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    train: Vec<usize>,
    test: Vec<usize>,
}

impl SplitIndices {
    /// Returns the training row indices.
    pub fn train(&self) -> &[usize] {
        &self.train
    }

    /// Returns the test row indices.
    pub fn test(&self) -> &[usize] {
        &self.test
    }
}

/// Partitions `0..n_samples` into train and test index lists.
///
/// Shuffles the index range with a Fisher–Yates shuffle seeded from `seed`,
/// then takes the first `floor(n_samples * train_fraction)` indices as the
/// training set and the remainder as the test set. Deterministic for a fixed
/// seed. `n_samples = 0` yields two empty lists without error.
///
/// # Errors
///
/// Returns [`SplitError::InvalidFraction`] when `train_fraction` is
/// non-finite or outside `[0, 1]`.
pub fn train_test_indices(
    n_samples: usize,
    train_fraction: f64,
    seed: u64,
) -> Result<SplitIndices, SplitError> {
    if !train_fraction.is_finite() || !(0.0..=1.0).contains(&train_fraction) {
        return Err(SplitError::InvalidFraction {
            fraction: train_fraction,
        });
    }

    let n_train = (n_samples as f64 * train_fraction) as usize;

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test = indices.split_off(n_train);
    Ok(SplitIndices {
        train: indices,
        test,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_sizes_truncate() {
        // floor(100 * 0.7) = 70
        let split = train_test_indices(100, 0.7, 6667).unwrap();
        assert_eq!(split.train().len(), 70);
        assert_eq!(split.test().len(), 30);

        // floor(7 * 0.5) = 3
        let split = train_test_indices(7, 0.5, 0).unwrap();
        assert_eq!(split.train().len(), 3);
        assert_eq!(split.test().len(), 4);
    }

    #[test]
    fn test_disjoint_exact_cover() {
        let split = train_test_indices(50, 0.8, 42).unwrap();
        let all: BTreeSet<usize> = split
            .train()
            .iter()
            .chain(split.test().iter())
            .copied()
            .collect();
        assert_eq!(all.len(), 50);
        assert_eq!(all, (0..50).collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_seeded_reproducibility() {
        let a = train_test_indices(200, 0.7, 99).unwrap();
        let b = train_test_indices(200, 0.7, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = train_test_indices(200, 0.7, 1).unwrap();
        let b = train_test_indices(200, 0.7, 2).unwrap();
        // Identical permutations from different seeds are astronomically
        // unlikely at this size.
        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffled_not_identity() {
        let split = train_test_indices(100, 1.0, 7).unwrap();
        let identity: Vec<usize> = (0..100).collect();
        assert_ne!(split.train(), identity.as_slice());
    }

    #[test]
    fn test_zero_samples() {
        let split = train_test_indices(0, 0.7, 0).unwrap();
        assert!(split.train().is_empty());
        assert!(split.test().is_empty());
    }

    #[test]
    fn test_fraction_bounds() {
        let all_train = train_test_indices(10, 1.0, 0).unwrap();
        assert_eq!(all_train.train().len(), 10);
        assert!(all_train.test().is_empty());

        let all_test = train_test_indices(10, 0.0, 0).unwrap();
        assert!(all_test.train().is_empty());
        assert_eq!(all_test.test().len(), 10);
    }

    #[test]
    fn test_invalid_fraction() {
        for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let result = train_test_indices(10, bad, 0);
            assert!(
                matches!(result, Err(SplitError::InvalidFraction { .. })),
                "expected InvalidFraction for {bad}"
            );
        }
    }
}
