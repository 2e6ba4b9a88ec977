// Licensed under the Apache-2.0 license

//! Nonce Command (0x16)
//!
//! Loads TempKey either from a combination of a host number and the RNG, or directly
//! from a host-supplied value.

use crate::{check_length, CommandDescriptor, CommandResult, Opcode};

/// Host input for the random nonce modes
pub const NONCE_NUM_IN_SIZE: usize = 20;

/// Host input for pass-through mode
pub const NONCE_PASSTHROUGH_SIZE: usize = 32;

/// RandOut returned by the random nonce modes
pub const NONCE_RAND_OUT_SIZE: usize = 32;

/// Nonce mode (param1)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceMode {
    /// Update the RNG seed, then combine
    UpdateSeed = 0x00,
    /// Combine without refreshing the seed
    NoSeedUpdate = 0x01,
    /// Write NumIn into TempKey unchanged
    PassThrough = 0x03,
}

/// Build a random Nonce command
///
/// `seed_update` selects [`NonceMode::UpdateSeed`] over [`NonceMode::NoSeedUpdate`].
pub fn nonce_random(num_in: &[u8], seed_update: bool) -> CommandResult<CommandDescriptor> {
    check_length("num_in", num_in, NONCE_NUM_IN_SIZE)?;
    let mode = if seed_update {
        NonceMode::UpdateSeed
    } else {
        NonceMode::NoSeedUpdate
    };

    Ok(CommandDescriptor::new(Opcode::Nonce, mode as u8, 0)
        .with_payload(num_in)
        .with_response_size(NONCE_RAND_OUT_SIZE))
}

/// Build a pass-through Nonce command; the device answers with a status byte
pub fn nonce_passthrough(value: &[u8]) -> CommandResult<CommandDescriptor> {
    check_length("value", value, NONCE_PASSTHROUGH_SIZE)?;

    Ok(CommandDescriptor::new(Opcode::Nonce, NonceMode::PassThrough as u8, 0).with_payload(value))
}
