// Licensed under the Apache-2.0 license

//! Raw bus boundary
//!
//! Implementors own the bus handle and the device address; opening the bus is their
//! constructor. Every method is a single blocking transaction.

use thiserror::Error;

/// First byte of every write, selecting how the device treats the rest
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordAddress {
    Reset = 0x00,
    Sleep = 0x01,
    Idle = 0x02,
    Command = 0x03,
}

/// Trait for hardware I2C communication
pub trait Bus {
    /// Drive the wake pulse (SDA low for at least tWLO)
    fn wake(&mut self) -> Result<(), BusError>;

    /// Send the idle word address
    fn idle(&mut self) -> Result<(), BusError>;

    /// Send the sleep word address
    fn sleep(&mut self) -> Result<(), BusError>;

    /// Write `bytes`, returning how many the device accepted
    fn write(&mut self, bytes: &[u8]) -> Result<usize, BusError>;

    /// Read up to `buffer.len()` bytes, returning how many arrived
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, BusError>;
}

/// Bus error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    /// The device did not acknowledge its address
    #[error("device did not acknowledge")]
    Nack,

    /// The transaction did not complete in time
    #[error("bus timeout")]
    Timeout,

    /// Driver-level I/O failure
    #[error("i/o failure: {0}")]
    Io(String),
}
