// Licensed under the Apache-2.0 license

//! Command Error Types
//!
//! Caller programming errors: detected before any bus traffic and never retried.

use thiserror::Error;

/// Command construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Payload does not fit in a command frame
    #[error("payload of {size} bytes exceeds the {max} byte frame limit")]
    PayloadTooLarge { size: usize, max: usize },

    /// Expected response does not fit in a response frame
    #[error("response of {size} bytes exceeds the {max} byte frame limit")]
    ResponseTooLarge { size: usize, max: usize },

    /// A fixed-size field was given the wrong number of bytes
    #[error("{field} must be {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Key slot outside the data zone
    #[error("key slot {0} out of range (0-15)")]
    InvalidSlot(u16),

    /// Invalid request parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;
