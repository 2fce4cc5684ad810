//! Random matrix generation.
//!
//! A single [`MatrixFactory`] holds one generator for the whole run, so the
//! entropy source is touched once per process rather than once per matrix.
//! [`MatrixFactory::with_seed`] gives a reproducible stream for tests and
//! for the CLI's `--seed` flag.

use log::debug;
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::error::Result;
use crate::matrix::Matrix;

/// Lower bound (inclusive) of generated values.
pub const VALUE_LOW: f64 = 0.0;
/// Upper bound (exclusive) of generated values.
pub const VALUE_HIGH: f64 = 10.0;

pub struct MatrixFactory {
    rng: StdRng,
    dist: Uniform<f64>,
}

impl MatrixFactory {
    /// Seeded from OS entropy; output differs between runs.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic: the same seed always yields the same matrices.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            dist: Uniform::new(VALUE_LOW, VALUE_HIGH),
        }
    }

    /// A `rows × cols` matrix of independent samples from U[0, 10).
    ///
    /// Fails with `InvalidDimension` if either dimension is zero and with
    /// `TooLarge` if the matrix can't be allocated.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Matrix> {
        debug!("generating random [{rows}x{cols}] matrix");
        let Self { rng, dist } = self;
        Matrix::from_fn(rows, cols, |_, _| dist.sample(&mut *rng))
    }
}

impl Default for MatrixFactory {
    fn default() -> Self {
        Self::from_entropy()
    }
}
