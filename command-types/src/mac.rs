// Licensed under the Apache-2.0 license

//! MAC (0x08) and CheckMac (0x28) Commands

use crate::{check_length, check_slot, CommandDescriptor, CommandError, CommandResult, Opcode};

/// Challenge carried in the MAC payload
pub const MAC_CHALLENGE_SIZE: usize = 32;

/// Digest returned by MAC
pub const MAC_RESPONSE_SIZE: usize = 32;

/// OtherData field of CheckMac
pub const CHECK_MAC_OTHER_DATA_SIZE: usize = 13;

/// Mode bit selecting TempKey instead of the payload as the challenge
pub const MAC_MODE_TEMPKEY_CHALLENGE: u8 = 0x01;

// ============================================================================
// MAC Command (0x08)
// ============================================================================

/// Build a MAC command over `slot`
///
/// A challenge is required unless `mode` takes it from TempKey, in which case it must
/// be absent.
pub fn mac(mode: u8, slot: u16, challenge: Option<&[u8]>) -> CommandResult<CommandDescriptor> {
    check_slot(slot)?;

    let cmd = CommandDescriptor::new(Opcode::Mac, mode, slot).with_response_size(MAC_RESPONSE_SIZE);
    let uses_tempkey = mode & MAC_MODE_TEMPKEY_CHALLENGE != 0;
    match (uses_tempkey, challenge) {
        (false, Some(challenge)) => {
            check_length("challenge", challenge, MAC_CHALLENGE_SIZE)?;
            Ok(cmd.with_payload(challenge))
        }
        (false, None) => Err(CommandError::InvalidParameter(
            "mac mode requires a challenge",
        )),
        (true, None) => Ok(cmd),
        (true, Some(_)) => Err(CommandError::InvalidParameter(
            "mac mode takes the challenge from TempKey",
        )),
    }
}

// ============================================================================
// CheckMac Command (0x28)
// ============================================================================

/// Build a CheckMac command; the device answers with success or a miscompare status
pub fn check_mac(
    mode: u8,
    slot: u16,
    client_challenge: &[u8],
    client_response: &[u8],
    other_data: &[u8],
) -> CommandResult<CommandDescriptor> {
    check_slot(slot)?;
    check_length("client_challenge", client_challenge, MAC_CHALLENGE_SIZE)?;
    check_length("client_response", client_response, MAC_RESPONSE_SIZE)?;
    check_length("other_data", other_data, CHECK_MAC_OTHER_DATA_SIZE)?;

    let mut payload = Vec::with_capacity(
        MAC_CHALLENGE_SIZE + MAC_RESPONSE_SIZE + CHECK_MAC_OTHER_DATA_SIZE,
    );
    payload.extend_from_slice(client_challenge);
    payload.extend_from_slice(client_response);
    payload.extend_from_slice(other_data);

    Ok(CommandDescriptor::new(Opcode::CheckMac, mode, slot).with_payload(payload))
}
