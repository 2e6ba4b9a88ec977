// Licensed under the Apache-2.0 license

//! crypti2c Command Types
//!
//! Shared command definitions for the ATSHA204 command set: opcodes and their
//! execution times, the [`CommandDescriptor`] consumed by the frame serializer, the
//! device and library status enumerations, and builders for the individual commands.

use core::time::Duration;
use crypti2c_osal::OctetBuffer;

pub mod device_info;
pub mod error;
pub mod mac;
pub mod nonce;
pub mod random;
pub mod read;
pub mod status;

// Re-export all types
pub use device_info::*;
pub use error::*;
pub use mac::*;
pub use nonce::*;
pub use random::*;
pub use read::*;
pub use status::*;

/// Bytes a command frame carries besides its payload:
/// count(1) + opcode(1) + param1(1) + param2(2) + checksum(2)
pub const COMMAND_FRAME_OVERHEAD: usize = 7;

/// Largest command frame the device accepts, count byte through checksum
pub const MAX_COMMAND_FRAME_SIZE: usize = 84;

/// Largest payload that fits in a command frame
pub const MAX_COMMAND_PAYLOAD_SIZE: usize = MAX_COMMAND_FRAME_SIZE - COMMAND_FRAME_OVERHEAD;

/// Bytes a response frame carries besides its body: count(1) + checksum(2)
pub const RESPONSE_FRAME_OVERHEAD: usize = 3;

/// Largest response frame the device produces
pub const MAX_RESPONSE_FRAME_SIZE: usize = 35;

/// Smallest valid response frame: count, one status byte, checksum
pub const MIN_RESPONSE_FRAME_SIZE: usize = RESPONSE_FRAME_OVERHEAD + 1;

/// Number of key slots in the data zone
pub const MAX_NUM_DATA_SLOTS: u16 = 16;

/// ATSHA204 opcodes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Pause = 0x01,
    Read = 0x02,
    Mac = 0x08,
    Hmac = 0x11,
    Write = 0x12,
    GenDig = 0x15,
    Nonce = 0x16,
    Lock = 0x17,
    Random = 0x1B,
    DeriveKey = 0x1C,
    UpdateExtra = 0x20,
    CheckMac = 0x28,
    DevRev = 0x30,
}

impl Opcode {
    /// Maximum execution time from the device datasheet
    pub const fn exec_time(self) -> Duration {
        let ms = match self {
            Opcode::Pause => 2,
            Opcode::Read => 4,
            Opcode::Mac => 35,
            Opcode::Hmac => 69,
            Opcode::Write => 42,
            Opcode::GenDig => 43,
            Opcode::Nonce => 60,
            Opcode::Lock => 24,
            Opcode::Random => 50,
            Opcode::DeriveKey => 62,
            Opcode::UpdateExtra => 12,
            Opcode::CheckMac => 38,
            Opcode::DevRev => 2,
        };
        Duration::from_millis(ms)
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        opcode as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Opcode::Pause),
            0x02 => Ok(Opcode::Read),
            0x08 => Ok(Opcode::Mac),
            0x11 => Ok(Opcode::Hmac),
            0x12 => Ok(Opcode::Write),
            0x15 => Ok(Opcode::GenDig),
            0x16 => Ok(Opcode::Nonce),
            0x17 => Ok(Opcode::Lock),
            0x1B => Ok(Opcode::Random),
            0x1C => Ok(Opcode::DeriveKey),
            0x20 => Ok(Opcode::UpdateExtra),
            0x28 => Ok(Opcode::CheckMac),
            0x30 => Ok(Opcode::DevRev),
            other => Err(other),
        }
    }
}

/// A single device command, ready to be serialized
///
/// Built per call and consumed read-only by the serializer. `response_size` is the
/// body length the caller expects back; a device status reply is always accepted too.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    pub opcode: u8,
    pub param1: u8,
    /// Little-endian on the wire
    pub param2: [u8; 2],
    pub payload: OctetBuffer,
    pub exec_time: Duration,
    pub response_size: usize,
}

impl CommandDescriptor {
    /// Create a descriptor for a known opcode with its datasheet execution time
    pub fn new(opcode: Opcode, param1: u8, param2: u16) -> Self {
        Self {
            opcode: opcode.into(),
            param1,
            param2: param2.to_le_bytes(),
            payload: OctetBuffer::new(),
            exec_time: opcode.exec_time(),
            response_size: 1,
        }
    }

    /// Create a descriptor from raw header bytes
    pub fn raw(opcode: u8, param1: u8, param2: [u8; 2]) -> Self {
        Self {
            opcode,
            param1,
            param2,
            payload: OctetBuffer::new(),
            exec_time: Duration::ZERO,
            response_size: 1,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<OctetBuffer>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_exec_time(mut self, exec_time: Duration) -> Self {
        self.exec_time = exec_time;
        self
    }

    pub fn with_response_size(mut self, response_size: usize) -> Self {
        self.response_size = response_size;
        self
    }

    /// Decoded opcode, if it is one the device defines
    pub fn known_opcode(&self) -> Option<Opcode> {
        Opcode::try_from(self.opcode).ok()
    }

    pub fn param2_u16(&self) -> u16 {
        u16::from_le_bytes(self.param2)
    }

    /// Total serialized frame length, count byte through checksum
    pub fn frame_len(&self) -> usize {
        self.payload.len() + COMMAND_FRAME_OVERHEAD
    }

    /// Frame capacity needed to receive the expected response
    pub fn response_frame_len(&self) -> usize {
        self.response_size.max(1) + RESPONSE_FRAME_OVERHEAD
    }

    /// Check the size invariants before anything touches the bus
    pub fn validate(&self) -> CommandResult<()> {
        if self.frame_len() > MAX_COMMAND_FRAME_SIZE {
            return Err(CommandError::PayloadTooLarge {
                size: self.payload.len(),
                max: MAX_COMMAND_PAYLOAD_SIZE,
            });
        }
        if self.response_frame_len() > MAX_RESPONSE_FRAME_SIZE {
            return Err(CommandError::ResponseTooLarge {
                size: self.response_size,
                max: MAX_RESPONSE_FRAME_SIZE - RESPONSE_FRAME_OVERHEAD,
            });
        }
        Ok(())
    }
}

/// Reject slot indices outside the data zone
pub fn check_slot(slot: u16) -> CommandResult<()> {
    if slot >= MAX_NUM_DATA_SLOTS {
        return Err(CommandError::InvalidSlot(slot));
    }
    Ok(())
}

/// Reject a buffer whose length differs from what the command layout requires
pub fn check_length(field: &'static str, bytes: &[u8], expected: usize) -> CommandResult<()> {
    if bytes.len() != expected {
        return Err(CommandError::InvalidLength {
            field,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
