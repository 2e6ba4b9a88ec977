// Licensed under the Apache-2.0 license

//! Challenge-response digest
//!
//! Reproduces the device's MAC computation so a host holding the key can check a
//! device's answer to a challenge. The message hashed is 88 bytes:
//!
//! | Bytes | Field |
//! |---|---|
//! | 0..32 | key |
//! | 32..64 | challenge |
//! | 64 | MAC opcode (0x08) |
//! | 65 | mode |
//! | 66..68 | param2, little-endian |
//! | 68..76 | OTP[0:7] |
//! | 76..79 | OTP[8:10] |
//! | 79 | SN[8] (0xEE) |
//! | 80..84 | SN[4:7] |
//! | 84..86 | SN[0:1] (0x01 0x23) |
//! | 86..88 | SN[2:3] |

use crate::digest::{DigestProvider, Sha256Provider, DIGEST_SIZE};
use crypti2c_command_types::{
    check_length, check_slot, CommandResult, Opcode, MAC_CHALLENGE_SIZE,
};
use crypti2c_osal::OctetBuffer;
use log::trace;
use zeroize::Zeroizing;

pub const KEY_SIZE: usize = 32;
pub const OTP8_SIZE: usize = 8;
pub const OTP3_SIZE: usize = 3;
pub const SN4_SIZE: usize = 4;
pub const SN23_SIZE: usize = 2;
pub const MAC_MESSAGE_SIZE: usize = 88;

/// SN[8], fixed by the manufacturer
const SN8: u8 = 0xEE;
/// SN[0:1], fixed by the manufacturer
const SN01: [u8; 2] = [0x01, 0x23];

/// Computes and checks challenge-response digests with a pluggable hash
#[derive(Debug, Clone, Default)]
pub struct ChallengeResponseEngine<D: DigestProvider = Sha256Provider> {
    provider: D,
}

impl<D: DigestProvider> ChallengeResponseEngine<D> {
    pub fn new(provider: D) -> Self {
        Self { provider }
    }

    /// Digest the MAC message built from the given fields
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        &self,
        challenge: &[u8],
        key: &[u8],
        mode: u8,
        param2: u16,
        otp8: &[u8],
        otp3: &[u8],
        sn4: &[u8],
        sn23: &[u8],
    ) -> CommandResult<OctetBuffer> {
        check_length("challenge", challenge, MAC_CHALLENGE_SIZE)?;
        check_length("key", key, KEY_SIZE)?;
        check_length("otp8", otp8, OTP8_SIZE)?;
        check_length("otp3", otp3, OTP3_SIZE)?;
        check_length("sn4", sn4, SN4_SIZE)?;
        check_length("sn23", sn23, SN23_SIZE)?;

        let mut message = Zeroizing::new(Vec::with_capacity(MAC_MESSAGE_SIZE));
        message.extend_from_slice(key);
        message.extend_from_slice(challenge);
        message.push(Opcode::Mac as u8);
        message.push(mode);
        message.extend_from_slice(&param2.to_le_bytes());
        message.extend_from_slice(otp8);
        message.extend_from_slice(otp3);
        message.push(SN8);
        message.extend_from_slice(sn4);
        message.extend_from_slice(&SN01);
        message.extend_from_slice(sn23);
        debug_assert_eq!(message.len(), MAC_MESSAGE_SIZE);

        let digest = self.provider.digest(&message);
        trace!("challenge-response digest for mode {mode:#04x} param2 {param2:#06x}");
        Ok(OctetBuffer::from(digest))
    }

    /// Check `expected` against the digest for `slot` with mode 0 and zeroed OTP and
    /// serial number fields
    ///
    /// The comparison takes the same time wherever the buffers differ.
    pub fn verify_default(
        &self,
        challenge: &[u8],
        expected: &[u8],
        key: &[u8],
        slot: u16,
    ) -> CommandResult<bool> {
        check_slot(slot)?;

        let digest = self.compute(
            challenge,
            key,
            0,
            slot,
            &[0u8; OTP8_SIZE],
            &[0u8; OTP3_SIZE],
            &[0u8; SN4_SIZE],
            &[0u8; SN23_SIZE],
        )?;
        debug_assert_eq!(digest.len(), DIGEST_SIZE);
        Ok(digest.ct_eq(expected))
    }
}

/// Digest the MAC message with SHA-256
#[allow(clippy::too_many_arguments)]
pub fn compute_challenge_response_digest(
    challenge: &[u8],
    key: &[u8],
    mode: u8,
    param2: u16,
    otp8: &[u8],
    otp3: &[u8],
    sn4: &[u8],
    sn23: &[u8],
) -> CommandResult<OctetBuffer> {
    ChallengeResponseEngine::<Sha256Provider>::default()
        .compute(challenge, key, mode, param2, otp8, otp3, sn4, sn23)
}

/// Verify a device response for `slot` against the default-field digest
pub fn verify_default_challenge_response(
    challenge: &[u8],
    expected: &[u8],
    key: &[u8],
    slot: u16,
) -> CommandResult<bool> {
    ChallengeResponseEngine::<Sha256Provider>::default().verify_default(
        challenge, expected, key, slot,
    )
}
