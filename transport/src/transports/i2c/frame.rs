// Licensed under the Apache-2.0 license

//! Command frame serialization
//!
//! Wire layout: `[count][opcode][param1][param2 lo][param2 hi][payload..][crc lo][crc hi]`
//! where `count` is the length of the whole frame, itself and the checksum included.

use super::checksum::{checksum_bytes, verify_checksum, CHECKSUM_SIZE};
use crate::{TransportError, TransportResult};
use crypti2c_command_types::{
    CommandDescriptor, CommandError, CommandResult, COMMAND_FRAME_OVERHEAD,
    MAX_COMMAND_FRAME_SIZE, MAX_COMMAND_PAYLOAD_SIZE,
};
use crypti2c_osal::OctetBuffer;

/// Offset of the payload within a command frame
const PAYLOAD_OFFSET: usize = 5;

/// A serialized, checksummed command frame
///
/// Payloads can carry key material, so the bytes are wiped when the frame is dropped.
#[derive(Debug, Clone)]
pub struct WireFrame {
    bytes: OctetBuffer,
}

impl WireFrame {
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The count byte; always equal to [`WireFrame::len`]
    pub fn count(&self) -> u8 {
        self.as_bytes().first().copied().unwrap_or(0)
    }

    pub fn checksum(&self) -> [u8; CHECKSUM_SIZE] {
        let bytes = self.as_bytes();
        let mut crc = [0u8; CHECKSUM_SIZE];
        if bytes.len() >= CHECKSUM_SIZE {
            crc.copy_from_slice(&bytes[bytes.len() - CHECKSUM_SIZE..]);
        }
        crc
    }
}

impl AsRef<[u8]> for WireFrame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Serialize a command descriptor into a wire frame
pub fn serialize(cmd: &CommandDescriptor) -> CommandResult<WireFrame> {
    let len = cmd.frame_len();
    if len > MAX_COMMAND_FRAME_SIZE {
        return Err(CommandError::PayloadTooLarge {
            size: cmd.payload.len(),
            max: MAX_COMMAND_PAYLOAD_SIZE,
        });
    }

    let mut bytes = OctetBuffer::zeroed(len);
    let buf = bytes.as_mut_slice();
    // len <= MAX_COMMAND_FRAME_SIZE, so it fits the count byte
    buf[0] = len as u8;
    buf[1] = cmd.opcode;
    buf[2] = cmd.param1;
    buf[3..PAYLOAD_OFFSET].copy_from_slice(&cmd.param2);
    buf[PAYLOAD_OFFSET..len - CHECKSUM_SIZE].copy_from_slice(cmd.payload.as_slice());

    let crc = checksum_bytes(&buf[..len - CHECKSUM_SIZE]);
    buf[len - CHECKSUM_SIZE..].copy_from_slice(&crc);

    Ok(WireFrame { bytes })
}

/// Header and payload recovered from a serialized command frame
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub opcode: u8,
    pub param1: u8,
    pub param2: [u8; 2],
    pub payload: OctetBuffer,
}

impl ParsedCommand {
    pub fn param2_u16(&self) -> u16 {
        u16::from_le_bytes(self.param2)
    }
}

/// Parse a command frame as the device would, without the word address byte
pub fn parse_command_frame(raw: &[u8]) -> TransportResult<ParsedCommand> {
    let count = *raw.first().ok_or(TransportError::Truncated {
        expected: COMMAND_FRAME_OVERHEAD,
        actual: 0,
    })? as usize;

    if !(COMMAND_FRAME_OVERHEAD..=MAX_COMMAND_FRAME_SIZE).contains(&count) {
        return Err(TransportError::InvalidLength {
            count,
            capacity: MAX_COMMAND_FRAME_SIZE,
        });
    }
    let frame = raw.get(..count).ok_or(TransportError::Truncated {
        expected: count,
        actual: raw.len(),
    })?;

    if !verify_checksum(frame) {
        let (body, trailer) = frame.split_at(count - CHECKSUM_SIZE);
        return Err(TransportError::ChecksumMismatch {
            computed: u16::from_le_bytes(checksum_bytes(body)),
            received: u16::from_le_bytes([trailer[0], trailer[1]]),
        });
    }

    Ok(ParsedCommand {
        opcode: frame[1],
        param1: frame[2],
        param2: [frame[3], frame[4]],
        payload: OctetBuffer::from_slice(&frame[PAYLOAD_OFFSET..count - CHECKSUM_SIZE]),
    })
}
