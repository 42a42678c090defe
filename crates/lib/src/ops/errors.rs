//! Error types for list operations.
//!
//! Only the strict (`try_`) operation variants produce errors. The lenient
//! operations translate out-of-range and missing-key conditions into no-ops
//! instead, so a reducer built on them is total.

use thiserror::Error;

/// Errors from the strict list operation variants.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OpsError {
    /// Index outside the collection's bounds
    #[error("index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds {
        /// The rejected index
        index: usize,
        /// Collection length at the time of the call
        len: usize,
    },
}

impl OpsError {
    /// Check if this error is an out-of-bounds index
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, OpsError::IndexOutOfBounds { .. })
    }
}

// Conversion to crate-level Error

impl From<OpsError> for crate::Error {
    fn from(err: OpsError) -> Self {
        crate::Error::Ops(err)
    }
}
