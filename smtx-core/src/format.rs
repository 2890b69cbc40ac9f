//! Whole-document parsing and rendering of the matrix text format
//!
//! The on-disk layout is two dimension header lines followed by one
//! parenthesized triple per non-zero entry:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 1)
//! (0, 2, 3)
//! (1, 0, 5)
//! ```
//!
//! Whitespace anywhere on a line is insignificant and blank lines are
//! ignored. Output is deterministic: entries are emitted in ascending
//! (row, col) order and zero-valued entries never appear.

use crate::error::{Result, SmtxError};
use crate::matrix::SparseMatrix;
use crate::parse::{parse_dimension, parse_entry, strip_whitespace};

/// Prefix of the row-count header line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the column-count header line
pub const COLS_PREFIX: &str = "cols=";

/// Parse a complete text document into a matrix
///
/// The two header lines must come first, in `rows=` then `cols=` order.
/// Every later non-blank line is parsed as an entry and inserted through
/// the bounded setter, so duplicate keys resolve last-write-wins and a
/// literal zero value removes any earlier entry. Any line failure aborts
/// the whole parse; no partially populated matrix escapes.
pub fn from_text(text: &str) -> Result<SparseMatrix> {
    let lines: Vec<String> = text
        .lines()
        .map(strip_whitespace)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(SmtxError::MissingDimensionHeader);
    }

    let rows = parse_dimension(&lines[0], ROWS_PREFIX)?;
    let cols = parse_dimension(&lines[1], COLS_PREFIX)?;

    let mut matrix = SparseMatrix::new(rows, cols);
    for line in &lines[2..] {
        let (row, col, value) = parse_entry(line)?;
        let (row, col) = entry_key(row, col, rows, cols)?;
        matrix.set(row, col, value)?;
    }

    Ok(matrix)
}

/// Render a matrix into the text format
///
/// Headers first, then one `(<row>, <col>, <value>)` line per entry in
/// ascending (row, col) order, each followed by a newline.
pub fn to_text(matrix: &SparseMatrix) -> String {
    let mut out = format!(
        "{ROWS_PREFIX}{}\n{COLS_PREFIX}{}\n",
        matrix.rows(),
        matrix.cols()
    );
    for (row, col, value) in matrix.sorted_entries() {
        out.push_str(&format!("({row}, {col}, {value})\n"));
    }
    out
}

/// Convert a signed parsed coordinate pair into a storage key
///
/// A negative coordinate can never satisfy the bounds invariant, so it is
/// reported the same way as any other out-of-range write.
fn entry_key(row: i64, col: i64, rows: usize, cols: usize) -> Result<(usize, usize)> {
    let out_of_bounds = || SmtxError::IndexOutOfBounds {
        row,
        col,
        rows,
        cols,
    };
    let r = usize::try_from(row).map_err(|_| out_of_bounds())?;
    let c = usize::try_from(col).map_err(|_| out_of_bounds())?;
    Ok((r, c))
}
