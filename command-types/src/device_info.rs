// Licensed under the Apache-2.0 license

//! Device Information Commands

use crate::{CommandDescriptor, Opcode};

/// Revision word returned by DevRev
pub const DEV_REV_SIZE: usize = 4;

/// Serial number length assembled from the configuration zone
pub const SERIAL_NUMBER_SIZE: usize = 9;

/// Build a DevRev command
pub fn dev_rev() -> CommandDescriptor {
    CommandDescriptor::new(Opcode::DevRev, 0, 0).with_response_size(DEV_REV_SIZE)
}

/// Assemble the serial number from the first configuration block
///
/// SN[0:3] sits at bytes 0..4 and SN[4:8] at bytes 8..13; the revision word between
/// them is skipped. Returns `None` if `config` is shorter than 13 bytes.
pub fn serial_number_from_config(config: &[u8]) -> Option<[u8; SERIAL_NUMBER_SIZE]> {
    let low = config.get(0..4)?;
    let high = config.get(8..13)?;
    let mut serial = [0u8; SERIAL_NUMBER_SIZE];
    serial[..4].copy_from_slice(low);
    serial[4..].copy_from_slice(high);
    Some(serial)
}
