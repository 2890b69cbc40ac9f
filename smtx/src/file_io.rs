//! File I/O for matrix text files
//!
//! This module provides loading and saving of matrices in the text format,
//! attaching the offending file path to every failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use smtx_core::{from_text, to_text, SmtxError, SparseMatrix};

/// Errors from loading or saving a matrix file
#[derive(Debug)]
pub enum FileError {
    /// File content violates the matrix text format
    Format { path: PathBuf, cause: SmtxError },
    /// Underlying file could not be read or written
    Io { path: PathBuf, source: io::Error },
}

impl core::fmt::Display for FileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FileError::Format { path, cause } => {
                write!(f, "{}: {cause}", path.display())
            }
            FileError::Io { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Format { cause, .. } => Some(cause),
            FileError::Io { source, .. } => Some(source),
        }
    }
}

/// Load a matrix from a text file
///
/// The whole file is read in one scoped call and parsed as a unit; a
/// failure on any line aborts the load, so the caller never observes a
/// partially populated matrix.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SparseMatrix, FileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_text(&text).map_err(|cause| FileError::Format {
        path: path.to_path_buf(),
        cause,
    })
}

/// Save a matrix to a text file, replacing any existing content
pub fn save<P: AsRef<Path>>(matrix: &SparseMatrix, path: P) -> Result<(), FileError> {
    let path = path.as_ref();
    fs::write(path, to_text(matrix)).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("smtx_{}_{name}", std::process::id()))
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("round_trip.txt");
        let mut m = SparseMatrix::new(3, 3);
        m.set(0, 0, 1).unwrap();
        m.set(2, 1, -6).unwrap();

        save(&m, &path).unwrap();
        let loaded = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, m);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = temp_path("does_not_exist.txt");
        match load(&path) {
            Err(FileError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_malformed_file_is_format_error() {
        let path = temp_path("malformed.txt");
        fs::write(&path, "cols=3\nrows=3\n").unwrap();
        let result = load(&path);
        fs::remove_file(&path).unwrap();

        match result {
            Err(FileError::Format { path: p, cause }) => {
                assert_eq!(p, path);
                assert_eq!(
                    cause,
                    SmtxError::MisorderedHeader {
                        line: "cols=3".to_string()
                    }
                );
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }
}
