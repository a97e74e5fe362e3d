//! Naive k-nearest-neighbors classification.
//!
//! Classifies each test row by majority vote among its k nearest training
//! rows under squared Euclidean distance. Exhaustive scan, no spatial
//! indexing — the baseline algorithm by design.
//!
//! # Quick start
//!
//! ```
//! use delphi_knn::classify;
//! use delphi_matrix::DenseMatrix;
//!
//! let train_features = DenseMatrix::from_vec(vec![0.0, 1.0, 10.0, 11.0], 4, 1).unwrap();
//! let train_labels = DenseMatrix::from_vec(vec![1_i64, 1, 2, 2], 4, 1).unwrap();
//! let test_features = DenseMatrix::from_vec(vec![0.5_f32], 1, 1).unwrap();
//!
//! let predictions = classify(&train_features, &train_labels, &test_features, 2).unwrap();
//! assert_eq!(predictions, vec![1]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify()
//!   ├─ validate shapes and k
//!   ├─ squared_euclidean()       (distance.rs)
//!   ├─ candidate set upkeep      (neighbors.rs)
//!   └─ vote tally + winner scan  (vote.rs)
//! ```
//!
//! For repeated queries against one training set, use
//! [`classify_with_scratch`] with a reusable [`ClassifyScratch`] to avoid
//! per-call heap allocation.
//!
//! Labels are any `Ord + Copy` key type (the pipeline uses `i64`); features
//! are `f32` with `f64` distance accumulation.

pub mod classify;
pub mod error;

pub(crate) mod distance;
pub(crate) mod neighbors;
pub(crate) mod vote;

pub use classify::{ClassifyScratch, classify, classify_with_scratch};
pub use error::KnnError;
