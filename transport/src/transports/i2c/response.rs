// Licensed under the Apache-2.0 license

//! Response validation
//!
//! Response layout: `[count][body..][crc lo][crc hi]`. A one-byte body is a device
//! status; anything longer is data from a successful command.

use super::checksum::{checksum_bytes, CHECKSUM_SIZE};
use crate::{TransportError, TransportResult};
use crypti2c_command_types::{DeviceStatus, MIN_RESPONSE_FRAME_SIZE};
use crypti2c_osal::OctetBuffer;

/// A validated response
#[derive(Debug, Clone)]
pub enum ResponseFrame {
    Status(DeviceStatus),
    Data(OctetBuffer),
}

impl ResponseFrame {
    pub fn status(&self) -> Option<DeviceStatus> {
        match self {
            ResponseFrame::Status(status) => Some(*status),
            ResponseFrame::Data(_) => None,
        }
    }
}

/// Validate raw response bytes against a receive capacity of `capacity` bytes
///
/// Bytes past the announced count are ignored.
pub fn validate_response(raw: &[u8], capacity: usize) -> TransportResult<ResponseFrame> {
    let count = *raw.first().ok_or(TransportError::Truncated {
        expected: MIN_RESPONSE_FRAME_SIZE,
        actual: 0,
    })? as usize;

    if count < MIN_RESPONSE_FRAME_SIZE || count > capacity {
        return Err(TransportError::InvalidLength { count, capacity });
    }
    let frame = raw.get(..count).ok_or(TransportError::Truncated {
        expected: count,
        actual: raw.len(),
    })?;

    let (head, trailer) = frame.split_at(count - CHECKSUM_SIZE);
    let computed = checksum_bytes(head);
    if computed != trailer {
        return Err(TransportError::ChecksumMismatch {
            computed: u16::from_le_bytes(computed),
            received: u16::from_le_bytes([trailer[0], trailer[1]]),
        });
    }

    match &head[1..] {
        [status] => DeviceStatus::try_from(*status)
            .map(ResponseFrame::Status)
            .map_err(TransportError::UnknownStatus),
        body => Ok(ResponseFrame::Data(OctetBuffer::from_slice(body))),
    }
}
