//! Arithmetic over sparse matrices
//!
//! All three operations borrow both operands and produce a fresh matrix.
//! Results are built exclusively through the bounded setter, so entries
//! that cancel to zero are never stored.

use crate::error::{Result, SmtxError};
use crate::matrix::SparseMatrix;

/// Arithmetic operations supported over two matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Multiply,
}

impl Op {
    /// Run this operation on two operands
    pub fn apply(self, a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Op::Add => add(a, b),
            Op::Sub => sub(a, b),
            Op::Multiply => multiply(a, b),
        }
    }

    /// Human-readable operation name
    pub const fn name(self) -> &'static str {
        match self {
            Op::Add => "addition",
            Op::Sub => "subtraction",
            Op::Multiply => "multiplication",
        }
    }
}

impl core::fmt::Display for Op {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Element-wise sum of two same-shaped matrices
pub fn add(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    check_same_shape(Op::Add, a, b)?;
    let mut result = SparseMatrix::new(a.rows(), a.cols());
    for ((row, col), value) in a.iter() {
        result.set(row, col, value + b.get(row, col))?;
    }
    // Keys present in both operands were already handled above.
    for ((row, col), value) in b.iter() {
        if !a.contains(row, col) {
            result.set(row, col, value)?;
        }
    }
    Ok(result)
}

/// Element-wise difference of two same-shaped matrices
pub fn sub(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    check_same_shape(Op::Sub, a, b)?;
    let mut result = SparseMatrix::new(a.rows(), a.cols());
    for ((row, col), value) in a.iter() {
        result.set(row, col, value - b.get(row, col))?;
    }
    for ((row, col), value) in b.iter() {
        if !a.contains(row, col) {
            result.set(row, col, -value)?;
        }
    }
    Ok(result)
}

/// Matrix product; requires `a.cols() == b.rows()`
///
/// Row-driven scan: each non-zero entry of `a` is combined with a full
/// sweep over the columns of `b`, skipping zero cells on the `b` side.
/// Cost is O(nnz(a) * b.cols()).
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    if a.cols() != b.rows() {
        return Err(SmtxError::DimensionMismatch {
            op: Op::Multiply.name(),
            lhs: a.dimensions(),
            rhs: b.dimensions(),
        });
    }
    let mut result = SparseMatrix::new(a.rows(), b.cols());
    for ((row, inner), lhs) in a.iter() {
        for col in 0..b.cols() {
            let rhs = b.get(inner, col);
            if rhs != 0 {
                let acc = result.get(row, col);
                result.set(row, col, acc + lhs * rhs)?;
            }
        }
    }
    Ok(result)
}

fn check_same_shape(op: Op, a: &SparseMatrix, b: &SparseMatrix) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(SmtxError::DimensionMismatch {
            op: op.name(),
            lhs: a.dimensions(),
            rhs: b.dimensions(),
        });
    }
    Ok(())
}
