//! SMTX - Sparse matrix text format with file I/O and arithmetic
//!
//! ## Architecture
//!
//! SMTX follows a core/implementation separation:
//!
//! - **smtx-core**: text-format parsing, sparse storage, and arithmetic
//!   (no I/O)
//! - **smtx**: file loading/saving and console rendering over the core
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{add, load, save};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let a = load("a.txt")?;
//!     let b = load("b.txt")?;
//!     let sum = add(&a, &b)?;
//!     save(&sum, "result.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export the core surface
pub use smtx_core::{
    // Storage
    SparseMatrix,
    // Arithmetic
    add, multiply, sub, Op,
    // Document parsing and rendering
    from_text, to_text,
    // Error handling
    SmtxError,
};

// Implementation modules
pub mod display;
pub mod file_io;

pub use display::render_dense;
pub use file_io::{load, save, FileError};
