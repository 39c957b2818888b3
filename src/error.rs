//! Error types for matrix construction and loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building a matrix.
///
/// Both variants are fatal for the operation that raised them; there are no
/// partial results and no retry semantics. Malformed numeric text is *not* an
/// error: the loader is deliberately permissive (see [`crate::loader`]).
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The allocator could not provide the requested buffer.
    #[error("failed to allocate {bytes} bytes of matrix storage")]
    Allocation { bytes: usize },

    /// The input file could not be opened or read.
    #[error("cannot read matrix from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
