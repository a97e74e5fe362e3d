//! Dense row-major 2D containers for the delphi classification pipeline.
//!
//! [`DenseMatrix`] owns a contiguous, shape-tagged buffer with O(1) element
//! access and index-list slicing. Slicing is how the pipeline carves one
//! parsed source table into train/test feature and label matrices:
//!
//! ```
//! use delphi_matrix::DenseMatrix;
//!
//! // 2 x 3 source, row-major
//! let m = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
//!
//! // Select row 1, columns 0 and 2
//! let s = m.slice(&[1], &[0, 2]).unwrap();
//! assert_eq!(s.data(), &[4.0, 6.0]);
//! ```

mod dense;
mod error;

pub use dense::DenseMatrix;
pub use error::MatrixError;
