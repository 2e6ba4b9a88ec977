// Licensed under the Apache-2.0 license

//! MAC API functions

use super::{execute_fixed, Crypti2cApiError, Crypti2cResult};
use crate::challenge_response::{verify_default_challenge_response, KEY_SIZE};
use crypti2c_command_types::{
    check_length, check_slot, check_mac, mac, CommandStatus, MAC_CHALLENGE_SIZE,
    MAC_RESPONSE_SIZE,
};
use crypti2c_session::Crypti2cSession;
use log::{debug, warn};

/// Have the device MAC a challenge with the key in `slot`
pub fn crypti2c_cmd_mac(
    session: &mut Crypti2cSession,
    mode: u8,
    slot: u16,
    challenge: Option<&[u8]>,
) -> Crypti2cResult<[u8; MAC_RESPONSE_SIZE]> {
    let cmd = mac(mode, slot, challenge)?;
    execute_fixed(session, &cmd)
}

/// Have the device check a response computed elsewhere
///
/// Returns `false` on a miscompare; other failure statuses are errors.
pub fn crypti2c_cmd_check_mac(
    session: &mut Crypti2cSession,
    mode: u8,
    slot: u16,
    client_challenge: &[u8],
    client_response: &[u8],
    other_data: &[u8],
) -> Crypti2cResult<bool> {
    let cmd = check_mac(mode, slot, client_challenge, client_response, other_data)?;
    let response = session.execute_command(&cmd)?;
    match response.status {
        CommandStatus::Success => Ok(true),
        CommandStatus::CheckMacMiscompare => Ok(false),
        status => Err(Crypti2cApiError::Status(status)),
    }
}

/// Challenge the device on `slot` and verify its answer with the host copy of the key
///
/// The device runs MAC in mode 0, so OTP and serial number bits beyond the fixed ones
/// stay out of the message.
pub fn crypti2c_cmd_challenge_response(
    session: &mut Crypti2cSession,
    challenge: &[u8],
    key: &[u8],
    slot: u16,
) -> Crypti2cResult<bool> {
    check_slot(slot)?;
    check_length("challenge", challenge, MAC_CHALLENGE_SIZE)?;
    check_length("key", key, KEY_SIZE)?;

    let response = crypti2c_cmd_mac(session, 0, slot, Some(challenge))?;
    let verified = verify_default_challenge_response(challenge, &response, key, slot)?;
    if verified {
        debug!("slot {slot} challenge-response verified");
    } else {
        warn!("slot {slot} challenge-response mismatch");
    }
    Ok(verified)
}
