//! Dense row-major matrix and the raw kernels it is built on.
//!
//! [`Matrix`] is the validated, owned form: at least one row, at least one
//! column, and every row the same length. The kernels in [`naive_ijk`] and
//! [`transpose`] work on flat slices and trust their callers.

pub mod naive_ijk;
pub mod transpose;

use std::fmt;
use std::ops::Index;

use log::debug;

use crate::error::{MatmulError, Result};
use naive_ijk::matmul_naive_ijk;

/// Rectangular grid of `f64` values stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(MatmulError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from nested rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let len = element_count(nrows, ncols)?;

        let mut data = alloc((nrows, ncols), len)?;
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatmulError::RaggedRow {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        let mut data = alloc((rows, cols), len)?;
        data.resize(len, 0.0);
        Ok(Self { data, rows, cols })
    }

    /// n×n identity.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Fill a matrix cell by cell, in row-major order.
    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let len = element_count(rows, cols)?;
        let mut data = alloc((rows, cols), len)?;
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()`.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index {} out of bounds ({} rows)", row, self.rows);
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        transpose::transpose(&self.data, &mut data, self.rows, self.cols);
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix product `self * rhs`.
    ///
    /// `self` is m×k and `rhs` must be k×n; the result is a fresh m×n matrix.
    /// Every output cell starts at 0.0 and sums `self[i][p] * rhs[p][j]` for
    /// `p` in increasing order. NaN and infinities propagate per IEEE 754.
    /// Neither operand is modified.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(MatmulError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }

        let (m, k, n) = (self.rows, self.cols, rhs.cols);
        debug!("multiplying [{m}x{k}] by [{k}x{n}]");

        let len = element_count(m, n)?;
        let mut c = alloc((m, n), len)?;
        c.resize(len, 0.0);
        matmul_naive_ijk(&self.data, &rhs.data, &mut c, m, n, k);

        Ok(Matrix {
            data: c,
            rows: m,
            cols: n,
        })
    }

    /// Floating-point operations performed by an m×k by k×n product.
    pub fn flop_count(m: usize, k: usize, n: usize) -> f64 {
        2.0 * m as f64 * k as f64 * n as f64
    }

    /// Flops per byte of A, B and C traffic, assuming each is touched once.
    pub fn arithmetic_intensity(m: usize, k: usize, n: usize) -> f64 {
        let (mf, kf, nf) = (m as f64, k as f64, n as f64);
        let bytes = size_of::<f64>() as f64 * (mf * kf + kf * nf + mf * nf);
        Self::flop_count(m, k, n) / bytes
    }
}

/// Largest element count whose `f64` buffer fits in `isize::MAX` bytes.
pub const MAX_ELEMENTS: usize = isize::MAX as usize / size_of::<f64>();

/// Element count of a `rows × cols` matrix, rejecting empty and oversized shapes.
pub(crate) fn element_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatmulError::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .filter(|&len| len <= MAX_ELEMENTS)
        .ok_or(MatmulError::TooLarge { rows, cols })
}

fn alloc((rows, cols): (usize, usize), len: usize) -> Result<Vec<f64>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatmulError::TooLarge { rows, cols })?;
    Ok(data)
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
