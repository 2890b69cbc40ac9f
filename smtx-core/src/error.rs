//! Error types for SMTX operations

/// Errors that can occur while parsing, building, or combining matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtxError {
    /// Entry line is not enclosed in parentheses
    NotParenthesized { line: String },
    /// Entry line does not split into exactly three fields
    WrongArity { line: String, found: usize },
    /// Field is not a plain signed decimal integer
    InvalidInteger { field: String },
    /// File has fewer than two non-blank lines
    MissingDimensionHeader,
    /// Expected a `rows=`/`cols=` header at this position
    MisorderedHeader { line: String },
    /// Write attempted outside the declared dimensions
    IndexOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes incompatible with the requested operation
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

impl core::fmt::Display for SmtxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SmtxError::NotParenthesized { line } => {
                write!(f, "entry `{line}` is not enclosed in parentheses")
            }
            SmtxError::WrongArity { line, found } => {
                write!(f, "entry `{line}` has {found} fields, expected 3")
            }
            SmtxError::InvalidInteger { field } => {
                write!(f, "`{field}` is not a valid integer")
            }
            SmtxError::MissingDimensionHeader => {
                write!(f, "file does not contain both dimension header lines")
            }
            SmtxError::MisorderedHeader { line } => {
                write!(f, "expected dimension header, found `{line}`")
            }
            SmtxError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(f, "index ({row}, {col}) is outside a {rows}x{cols} matrix")
            }
            SmtxError::DimensionMismatch { op, lhs, rhs } => {
                write!(
                    f,
                    "matrix dimensions {}x{} and {}x{} do not match for {op}",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
        }
    }
}

impl std::error::Error for SmtxError {}

/// Result type for SMTX operations
pub type Result<T> = core::result::Result<T, SmtxError>;
