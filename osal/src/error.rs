// Licensed under the Apache-2.0 license

//! Error types for OSAL

use thiserror::Error;

pub type OsalResult<T> = Result<T, OsalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsalError {
    /// Requested range does not lie inside the buffer
    #[error("range {start}..{end} out of bounds for buffer of {len} bytes")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// Invalid parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}
