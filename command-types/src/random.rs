// Licensed under the Apache-2.0 license

//! Random Command (0x1B)

use crate::{CommandDescriptor, Opcode};

/// Bytes returned by a Random command
pub const RANDOM_SIZE: usize = 32;

/// Whether the device refreshes its EEPROM seed before generating
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RandomMode {
    #[default]
    UpdateSeed = 0x00,
    /// Only valid before the configuration zone is locked
    NoSeedUpdate = 0x01,
}

/// Build a Random command
pub fn random(mode: RandomMode) -> CommandDescriptor {
    CommandDescriptor::new(Opcode::Random, mode as u8, 0).with_response_size(RANDOM_SIZE)
}
