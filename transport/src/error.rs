// Licensed under the Apache-2.0 license

//! Transport error types
//!
//! Every variant is a communication failure from the session's point of view: the
//! frame did not make it across intact and the exchange may be retried.

use crate::transports::i2c::BusError;
use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The bus driver reported a failure
    #[error("bus error: {0}")]
    Bus(#[from] BusError),

    /// The bus accepted fewer bytes than the frame holds
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// Fewer bytes arrived than the count byte announced
    #[error("truncated response: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Count byte outside the acceptable range
    #[error("invalid response length {count} (capacity {capacity})")]
    InvalidLength { count: usize, capacity: usize },

    /// Received checksum does not match the one computed over the frame
    #[error("checksum mismatch: computed {computed:#06x}, received {received:#06x}")]
    ChecksumMismatch { computed: u16, received: u16 },

    /// Single-byte body that is not a defined device status
    #[error("unknown device status {0:#04x}")]
    UnknownStatus(u8),

    /// The wake handshake did not produce the awake status
    #[error("unexpected wake response")]
    UnexpectedWakeResponse,
}
