//! Console rendering of matrices

use smtx_core::SparseMatrix;

/// Render a matrix as a dense grid, one row per line
///
/// Every cell is printed including zeros, space-separated. Intended for
/// console output of small matrices; the cost is O(rows * cols) regardless
/// of sparsity.
pub fn render_dense(matrix: &SparseMatrix) -> String {
    let mut out = String::new();
    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            if col > 0 {
                out.push(' ');
            }
            out.push_str(&matrix.get(row, col).to_string());
        }
        out.push('\n');
    }
    out
}
