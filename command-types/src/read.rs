// Licensed under the Apache-2.0 license

//! Read Command (0x02)

use crate::{CommandDescriptor, Opcode};

/// Param1 bit requesting a 32-byte block instead of a 4-byte word
const READ_BLOCK_FLAG: u8 = 0x80;

/// Memory zone selector
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Config = 0x00,
    Otp = 0x01,
    Data = 0x02,
}

/// Read granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadSize {
    Word,
    Block,
}

impl ReadSize {
    pub const fn len(self) -> usize {
        match self {
            ReadSize::Word => 4,
            ReadSize::Block => 32,
        }
    }
}

/// Build a Read command
///
/// `address` is the word address within the zone, encoded into param2.
pub fn read(zone: Zone, address: u16, size: ReadSize) -> CommandDescriptor {
    let mut param1 = zone as u8;
    if size == ReadSize::Block {
        param1 |= READ_BLOCK_FLAG;
    }
    CommandDescriptor::new(Opcode::Read, param1, address).with_response_size(size.len())
}
