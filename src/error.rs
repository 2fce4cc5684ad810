//! Error types shared by the library and the CLI.

use std::process::ExitCode;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MatmulError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatmulError {
    /// Inner dimensions of a product don't agree (A is m×k, B is k'×n, k != k').
    #[error(
        "dimension mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols} \
         (inner dimensions {left_cols} != {right_rows})"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("invalid dimension: {rows}x{cols} (rows and cols must both be >= 1)")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("shape {rows}x{cols} does not match buffer of {len} elements")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// Element count overflows or can't be allocated.
    #[error("matrix too large: {rows}x{cols} elements cannot be allocated")]
    TooLarge { rows: usize, cols: usize },

    #[error("malformed argument {name}: '{value}' is not a positive integer")]
    MalformedArgument { name: String, value: String },
}

impl MatmulError {
    /// Raw exit status for this error; never 0.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::MalformedArgument { .. } => 2,
            Self::InvalidDimension { .. } => 3,
            Self::DimensionMismatch { .. } => 4,
            Self::RaggedRow { .. } => 5,
            Self::ShapeMismatch { .. } => 6,
            Self::TooLarge { .. } => 7,
        }
    }

    /// Process exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
