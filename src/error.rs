//! Error taxonomy for the book stores.
//!
//! Every expected failure is recovered locally: the store is left exactly
//! as it was before the call, and the error is surfaced to the caller.
//! No core operation panics for an expected condition.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by store operations and the persistence boundary.
#[derive(Debug, Error)]
pub enum BookError {
    /// A positional index was outside `[0, len)` for the addressed
    /// container. The store is unchanged.
    #[error("index {index} out of bounds for {len} orders")]
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Size of the addressed container at call time
        len: usize,
    },

    /// A file could not be opened for reading or writing. On load the
    /// store keeps its pre-call contents; on save the in-memory store is
    /// untouched either way.
    #[error("failed to {op} {path}: {source}")]
    Io {
        /// What was being attempted ("open" or "create")
        op: &'static str,
        /// The target path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A persistence line did not match the `price volume side` format.
    /// The side enumeration is closed: an unrecognized token is an error,
    /// never coerced to a default side.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number in the file
        line: usize,
        /// Human-readable description including the offending text
        reason: String,
    },
}
