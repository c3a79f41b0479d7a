//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// Every fallible allocator entry point returns this type so callers can
/// recover. The fatal convenience layer on [`ArenaVec`](crate::ArenaVec)
/// turns it into process termination instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The request violates the allocator's contract: a zero-byte
    /// allocation, a zero-length `realloc` source, a zero initial
    /// capacity, or use of a destroyed arena.
    InvalidArgument {
        /// What was wrong with the request.
        reason: &'static str,
    },
    /// A new region could not be obtained, either because the system
    /// allocator refused or because the configured byte limit forbids it.
    OutOfMemory {
        /// Number of bytes the failed region would have held.
        requested: usize,
    },
}

impl ArenaError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }

    /// Whether this error reports memory exhaustion.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid arena request: {reason}"),
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: could not reserve a {requested} byte region")
            }
        }
    }
}

impl Error for ArenaError {}
