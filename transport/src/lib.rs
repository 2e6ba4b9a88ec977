// Licensed under the Apache-2.0 license

//! crypti2c Transport Layer
//!
//! Moves command frames between the host and the device. The [`Bus`] trait is the
//! boundary to the platform's I2C driver; everything above it (framing, checksums,
//! response validation and the wake handshake) lives here.

use core::time::Duration;

pub mod error;
pub mod transports;

// Re-export commonly used types
pub use error::{TransportError, TransportResult};

// Re-export I2C types specifically
pub use transports::i2c::{
    checksum, frame, parse_command_frame, response, serialize, validate_response, Bus, BusError,
    I2cTransport, ParsedCommand, ResponseFrame, WireFrame, WordAddress, WAKE_RESPONSE_SIZE,
};

/// Default time between the wake pulse and reading the wake reply
pub const DEFAULT_WAKE_DELAY: Duration = Duration::from_micros(2500);

/// Transport trait for device communication
///
/// One frame out, one frame back. Retrying is the caller's business.
pub trait Transport {
    /// Wake the device and confirm it answered with the awake status
    fn wake(&mut self, wake_delay: Duration) -> TransportResult<()>;

    /// Put the device in idle; volatile state is kept
    fn idle(&mut self) -> TransportResult<()>;

    /// Put the device to sleep; volatile state is lost
    fn sleep(&mut self) -> TransportResult<()>;

    /// Write a serialized command frame
    fn send(&mut self, frame: &WireFrame) -> TransportResult<()>;

    /// Block while the device executes
    fn wait(&mut self, duration: Duration);

    /// Read and validate one response frame of at most `capacity` bytes
    fn receive(&mut self, capacity: usize) -> TransportResult<ResponseFrame>;
}
