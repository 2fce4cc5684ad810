//! Command-line surface and the run configuration built from it.

use clap::Parser;
use log::{debug, warn};

use crate::error::{MatmulError, Result};
use crate::matrix::element_count;
use crate::printer::{DEFAULT_MAX_COLS, DEFAULT_MAX_ROWS};

pub const DEFAULT_M: usize = 3;
pub const DEFAULT_K: usize = 4;
pub const DEFAULT_N: usize = 5;

const DIM_NAMES: [&str; 3] = ["M", "K", "N"];

#[derive(Parser, Debug)]
#[command(name = "dense-matmul")]
#[command(about = "Multiply two random dense matrices (M×K by K×N) and time the product")]
#[command(version)]
pub struct Cli {
    /// Dimensions M K N. Fewer than three values means the defaults 3 4 5;
    /// anything past the third is ignored.
    #[arg(value_name = "DIMS", allow_negative_numbers = true)]
    pub dims: Vec<String>,

    /// Seed the generator for reproducible matrices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rows shown per matrix preview
    #[arg(long, default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    /// Columns shown per matrix preview
    #[arg(long, default_value_t = DEFAULT_MAX_COLS)]
    pub max_cols: usize,
}

/// Shapes of the product: A is m×k, B is k×n.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub m: usize,
    pub k: usize,
    pub n: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            m: DEFAULT_M,
            k: DEFAULT_K,
            n: DEFAULT_N,
        }
    }
}

impl Dimensions {
    /// Read M, K, N from raw positional arguments.
    ///
    /// Each of the first three values must be a positive integer; a bad one
    /// is an error rather than a silent zero.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() < DIM_NAMES.len() {
            if !args.is_empty() {
                warn!(
                    "expected 3 dimensions, got {}; using defaults {}x{}x{}",
                    args.len(),
                    DEFAULT_M,
                    DEFAULT_K,
                    DEFAULT_N
                );
            }
            return Ok(Self::default());
        }
        if args.len() > DIM_NAMES.len() {
            debug!("ignoring {} extra argument(s)", args.len() - DIM_NAMES.len());
        }

        let m = parse_positive(DIM_NAMES[0], args[0].as_ref())?;
        let k = parse_positive(DIM_NAMES[1], args[1].as_ref())?;
        let n = parse_positive(DIM_NAMES[2], args[2].as_ref())?;
        Ok(Self { m, k, n })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewLimits {
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_cols: DEFAULT_MAX_COLS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub dims: Dimensions,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub preview: PreviewLimits,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let dims = Dimensions::from_args(&cli.dims)?;
        // A, B and C must all be allocatable before any work starts.
        for (rows, cols) in [(dims.m, dims.k), (dims.k, dims.n), (dims.m, dims.n)] {
            element_count(rows, cols)?;
        }
        for (name, value) in [("--max-rows", cli.max_rows), ("--max-cols", cli.max_cols)] {
            if value == 0 {
                return Err(MatmulError::MalformedArgument {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(Self {
            dims,
            seed: cli.seed,
            preview: PreviewLimits {
                max_rows: cli.max_rows,
                max_cols: cli.max_cols,
            },
        })
    }
}

fn parse_positive(name: &str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(MatmulError::MalformedArgument {
            name: name.to_string(),
            value: raw.to_string(),
        }),
    }
}
