//! Truncated text previews of a matrix.
//!
//! Layout, for a matrix with more rows and columns than the caps:
//!
//! ```text
//! Matrix [10 x 10]:
//! 1	2	3	4	5	...
//! ...
//! ...
//!
//! ```
//!
//! Every shown value is followed by a tab. Column truncation appends `...`
//! to each shown row; row truncation adds one `...` line. A blank line
//! closes the block.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::matrix::Matrix;

pub const DEFAULT_MAX_ROWS: usize = 5;
pub const DEFAULT_MAX_COLS: usize = 5;

pub const TRUNCATION_MARKER: &str = "...";

/// Render the preview into a `String`.
pub fn render(matrix: &Matrix, max_rows: usize, max_cols: usize) -> String {
    let (rows, cols) = matrix.shape();
    let mut out = String::new();

    // Writing into a String can't fail.
    let _ = writeln!(out, "Matrix [{} x {}]:", rows, cols);
    for row in matrix.rows().take(max_rows) {
        for value in row.iter().take(max_cols) {
            let _ = write!(out, "{}\t", value);
        }
        if cols > max_cols {
            out.push_str(TRUNCATION_MARKER);
        }
        out.push('\n');
    }
    if rows > max_rows {
        out.push_str(TRUNCATION_MARKER);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Write the preview to any sink.
pub fn write_preview<W: Write>(
    sink: &mut W,
    matrix: &Matrix,
    max_rows: usize,
    max_cols: usize,
) -> io::Result<()> {
    sink.write_all(render(matrix, max_rows, max_cols).as_bytes())
}
