// Licensed under the Apache-2.0 license

//! Random number and nonce API functions

use super::{execute, execute_fixed, Crypti2cResult};
use crypti2c_command_types::{
    nonce_passthrough, nonce_random, random, RandomMode, NONCE_RAND_OUT_SIZE, RANDOM_SIZE,
};
use crypti2c_session::Crypti2cSession;

/// Get 32 random bytes from the device
///
/// # Example
///
/// ```ignore
/// let bytes = crypti2c_cmd_random(&mut session, RandomMode::UpdateSeed)?;
/// ```
pub fn crypti2c_cmd_random(
    session: &mut Crypti2cSession,
    mode: RandomMode,
) -> Crypti2cResult<[u8; RANDOM_SIZE]> {
    execute_fixed(session, &random(mode))
}

/// Seed TempKey from `num_in` and the device RNG
///
/// Returns RandOut, which the host needs to reproduce TempKey.
pub fn crypti2c_cmd_nonce_random(
    session: &mut Crypti2cSession,
    num_in: &[u8],
    seed_update: bool,
) -> Crypti2cResult<[u8; NONCE_RAND_OUT_SIZE]> {
    let cmd = nonce_random(num_in, seed_update)?;
    execute_fixed(session, &cmd)
}

/// Load `value` into TempKey unchanged
pub fn crypti2c_cmd_nonce_passthrough(
    session: &mut Crypti2cSession,
    value: &[u8],
) -> Crypti2cResult<()> {
    let cmd = nonce_passthrough(value)?;
    execute(session, &cmd)?;
    Ok(())
}
