// Licensed under the Apache-2.0 license

//! Checksum calculation for ATSHA204 frames
//!
//! CRC-16 with polynomial 0x8005 and zero initial value. Input bytes are consumed least
//! significant bit first while the register itself is not reflected, so none of the
//! catalogue CRC-16 variants match. The result travels little-endian.

use crc::{Algorithm, Crc};

/// Length of the checksum trailer
pub const CHECKSUM_SIZE: usize = 2;

const CRC_16_ATSHA204: Algorithm<u16> = Algorithm {
    width: 16,
    poly: 0x8005,
    init: 0x0000,
    refin: true,
    refout: false,
    xorout: 0x0000,
    check: 0xbcdd,
    residue: 0x0000,
};

static CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_ATSHA204);

/// Calculate the checksum over `data`
pub fn calc_checksum(data: &[u8]) -> u16 {
    CRC16.checksum(data)
}

/// Checksum as it appears on the wire
pub fn checksum_bytes(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    calc_checksum(data).to_le_bytes()
}

/// Verify a frame whose last two bytes are its checksum
pub fn verify_checksum(frame: &[u8]) -> bool {
    match frame.len().checked_sub(CHECKSUM_SIZE) {
        Some(split) => {
            let (body, trailer) = frame.split_at(split);
            checksum_bytes(body) == trailer
        }
        None => false,
    }
}
