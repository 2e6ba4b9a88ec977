// Licensed under the Apache-2.0 license

//! Device and library status codes
//!
//! [`DeviceStatus`] is the byte the chip puts in a one-byte response body.
//! [`CommandStatus`] is the outcome the library hands back to callers once a command
//! has run to completion. [`DeviceStatus::disposition`] is the only bridge between them.

use core::fmt;

/// Status byte reported by the device
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceStatus {
    /// The command succeeded
    Success = 0x00,
    /// CheckMac found the supplied response did not match
    CheckMacMiscompare = 0x01,
    /// Length, opcode or parameters are illegal regardless of device state
    ParseError = 0x03,
    /// Internal computation fault
    EccFault = 0x05,
    /// Command is legal but cannot run in the current device state
    ExecutionError = 0x0F,
    /// Reply to a wake token
    Awake = 0x11,
    /// Device asked the host to resend
    Nak = 0xAA,
    /// Command was not received intact
    CommError = 0xFF,
}

impl TryFrom<u8> for DeviceStatus {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(DeviceStatus::Success),
            0x01 => Ok(DeviceStatus::CheckMacMiscompare),
            0x03 => Ok(DeviceStatus::ParseError),
            0x05 => Ok(DeviceStatus::EccFault),
            0x0F => Ok(DeviceStatus::ExecutionError),
            0x11 => Ok(DeviceStatus::Awake),
            0xAA => Ok(DeviceStatus::Nak),
            0xFF => Ok(DeviceStatus::CommError),
            other => Err(other),
        }
    }
}

impl From<DeviceStatus> for u8 {
    fn from(status: DeviceStatus) -> Self {
        status as u8
    }
}

/// What the retry engine does with a device status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The exchange is over
    Complete(CommandStatus),
    /// Transient; wake the device and resend
    Retry,
}

impl DeviceStatus {
    pub fn disposition(self) -> Disposition {
        match self {
            DeviceStatus::Success => Disposition::Complete(CommandStatus::Success),
            DeviceStatus::CheckMacMiscompare => {
                Disposition::Complete(CommandStatus::CheckMacMiscompare)
            }
            DeviceStatus::ParseError => Disposition::Complete(CommandStatus::ParseError),
            DeviceStatus::EccFault => Disposition::Complete(CommandStatus::ExecutionFault),
            DeviceStatus::ExecutionError => Disposition::Complete(CommandStatus::ExecutionError),
            // An awake reply to a command means the device dropped back to its wake state
            DeviceStatus::Awake | DeviceStatus::Nak | DeviceStatus::CommError => {
                Disposition::Retry
            }
        }
    }
}

/// Terminal outcome of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandStatus {
    Success,
    CheckMacMiscompare,
    ParseError,
    ExecutionFault,
    ExecutionError,
    /// Frame could not be exchanged intact within the retry budget
    CommunicationError,
}

impl CommandStatus {
    pub fn is_success(self) -> bool {
        self == CommandStatus::Success
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Success => write!(f, "success"),
            CommandStatus::CheckMacMiscompare => write!(f, "checkmac miscompare"),
            CommandStatus::ParseError => write!(f, "parse error"),
            CommandStatus::ExecutionFault => write!(f, "execution fault"),
            CommandStatus::ExecutionError => write!(f, "execution error"),
            CommandStatus::CommunicationError => write!(f, "communication error"),
        }
    }
}
