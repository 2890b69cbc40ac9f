//! Line-level parsing for the matrix text format
//!
//! This module provides pure parsing functions for single lines of the
//! text format with no I/O dependencies. Every function expects its input
//! to already be stripped of whitespace (see [`strip_whitespace`]).

use crate::error::{Result, SmtxError};

/// Remove every whitespace character from a line
///
/// The text format treats whitespace anywhere on a line as insignificant,
/// so lines are normalized before any other check runs.
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a strict signed decimal integer
///
/// Accepts an optional leading `-` followed by one or more ASCII digits
/// and nothing else. Decimal points, exponents, and a leading `+` are all
/// rejected. Values that do not fit in an `i64` are rejected as well.
pub fn parse_integer(field: &str) -> Result<i64> {
    let invalid = || SmtxError::InvalidInteger {
        field: field.to_string(),
    };

    let (negative, digits) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field),
    };

    if digits.is_empty() {
        return Err(invalid());
    }

    // Accumulate negated so that i64::MIN round-trips.
    let mut value: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(invalid());
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_sub((byte - b'0') as i64))
            .ok_or_else(invalid)?;
    }

    if negative {
        Ok(value)
    } else {
        value.checked_neg().ok_or_else(invalid)
    }
}

/// Parse one entry line into a `(row, col, value)` triple
///
/// The line must be enclosed in parentheses and contain exactly three
/// comma-separated integer fields. Row and column come back signed; range
/// checking happens at insertion time, not here.
pub fn parse_entry(line: &str) -> Result<(i64, i64, i64)> {
    let interior = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| SmtxError::NotParenthesized {
            line: line.to_string(),
        })?;

    let fields: Vec<&str> = interior.split(',').collect();
    if fields.len() != 3 {
        return Err(SmtxError::WrongArity {
            line: line.to_string(),
            found: fields.len(),
        });
    }

    let row = parse_integer(fields[0])?;
    let col = parse_integer(fields[1])?;
    let value = parse_integer(fields[2])?;
    Ok((row, col, value))
}

/// Parse a dimension header line such as `rows=12`
///
/// The line must start with the given prefix; the remainder must be an
/// unsigned decimal numeral. A negative or otherwise malformed numeral is
/// an integer-parse failure, not a separate bounds check.
pub fn parse_dimension(line: &str, prefix: &str) -> Result<usize> {
    let digits = line
        .strip_prefix(prefix)
        .ok_or_else(|| SmtxError::MisorderedHeader {
            line: line.to_string(),
        })?;

    let invalid = || SmtxError::InvalidInteger {
        field: digits.to_string(),
    };

    if digits.is_empty() {
        return Err(invalid());
    }

    let mut value: usize = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(invalid());
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((byte - b'0') as usize))
            .ok_or_else(invalid)?;
    }

    Ok(value)
}
