//! Dense row-major matrix storage and index-list slicing.

use crate::error::MatrixError;

/// A fixed-shape 2D container backed by a flat row-major buffer.
///
/// The invariant `data.len() == rows * columns` holds for every constructed
/// value. The row-major convention is fixed: element `(r, c)` lives at
/// `data[r * columns + c]`, and [`DenseMatrix::row`] returns a contiguous
/// slice. There is no in-place mutation after construction; slicing
/// allocates a new matrix and leaves the source untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T: Copy> DenseMatrix<T> {
    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `data.len() != rows * columns`.
    pub fn from_vec(data: Vec<T>, rows: usize, columns: usize) -> Result<Self, MatrixError> {
        if data.len() != rows * columns {
            return Err(MatrixError::ShapeMismatch {
                len: data.len(),
                rows,
                columns,
            });
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `true` when the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the flat row-major backing buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowOutOfBounds`] or
    /// [`MatrixError::ColumnOutOfBounds`] when an index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        if row >= self.rows {
            return Err(MatrixError::RowOutOfBounds {
                index: row,
                rows: self.rows,
            });
        }
        if col >= self.columns {
            return Err(MatrixError::ColumnOutOfBounds {
                index: col,
                columns: self.columns,
            });
        }
        Ok(self.data[row * self.columns + col])
    }

    /// Returns row `r` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= self.rows()`. Callers on fallible paths should
    /// validate shapes first; hot loops index rows already known to be in
    /// range.
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.columns;
        &self.data[start..start + self.columns]
    }

    /// Builds a new matrix by selecting rows and columns of this one.
    ///
    /// The result has shape `(row_indices.len(), col_indices.len())` and
    /// result cell `(i, j)` equals source cell
    /// `(row_indices[i], col_indices[j])`. Index lists may repeat or reorder
    /// indices freely.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowOutOfBounds`] or
    /// [`MatrixError::ColumnOutOfBounds`] if any index is out of range; no
    /// silent clamping.
    pub fn slice(
        &self,
        row_indices: &[usize],
        col_indices: &[usize],
    ) -> Result<DenseMatrix<T>, MatrixError> {
        // Validate up front so the output buffer is all-or-nothing.
        for &r in row_indices {
            if r >= self.rows {
                return Err(MatrixError::RowOutOfBounds {
                    index: r,
                    rows: self.rows,
                });
            }
        }
        for &c in col_indices {
            if c >= self.columns {
                return Err(MatrixError::ColumnOutOfBounds {
                    index: c,
                    columns: self.columns,
                });
            }
        }

        let mut data = Vec::with_capacity(row_indices.len() * col_indices.len());
        for &r in row_indices {
            let source_row = self.row(r);
            for &c in col_indices {
                data.push(source_row[c]);
            }
        }
        Ok(DenseMatrix {
            rows: row_indices.len(),
            columns: col_indices.len(),
            data,
        })
    }
}
