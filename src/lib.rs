//! Dense matrix multiplication, the textbook way.
//!
//! Generate two random matrices, multiply them with the classic i-j-k
//! triple loop, and look at a truncated preview of the result. The
//! multiply is the part worth reading; everything else is glue around it.
//!
//! ## Usage
//!
//! ```
//! use dense_matmul::{Matrix, multiply};
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
//! ```
//!
//! Random inputs come from a [`MatrixFactory`], which owns one generator
//! for its whole lifetime:
//!
//! ```
//! use dense_matmul::{MatrixFactory, multiply};
//!
//! let mut factory = MatrixFactory::with_seed(42);
//! let a = factory.generate(3, 4).unwrap();
//! let b = factory.generate(4, 5).unwrap();
//! assert_eq!(multiply(&a, &b).unwrap().shape(), (3, 5));
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod matrix;
pub mod printer;

pub use error::{MatmulError, Result};
pub use factory::MatrixFactory;
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;

/// Matrix multiply: returns A * B as a new matrix.
///
/// A is m×k, B is k×n, the result is m×n. Fails with
/// [`MatmulError::DimensionMismatch`] when A's column count differs from
/// B's row count. See [`Matrix::multiply`].
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.multiply(b)
}
