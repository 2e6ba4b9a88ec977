// Licensed under the Apache-2.0 license

//! Device information API functions

use super::{execute, execute_fixed, Crypti2cApiError, Crypti2cResult};
use crypti2c_command_types::{
    dev_rev, read, serial_number_from_config, ReadSize, Zone, DEV_REV_SIZE, SERIAL_NUMBER_SIZE,
};
use crypti2c_osal::OctetBuffer;
use crypti2c_session::Crypti2cSession;

/// Read a word or block from a zone
pub fn crypti2c_cmd_read(
    session: &mut Crypti2cSession,
    zone: Zone,
    address: u16,
    size: ReadSize,
) -> Crypti2cResult<OctetBuffer> {
    let data = execute(session, &read(zone, address, size))?;
    if data.len() != size.len() {
        return Err(Crypti2cApiError::UnexpectedResponse {
            expected: size.len(),
            actual: data.len(),
        });
    }
    Ok(data)
}

/// Read the 9-byte serial number from the configuration zone
pub fn crypti2c_cmd_serial_number(
    session: &mut Crypti2cSession,
) -> Crypti2cResult<[u8; SERIAL_NUMBER_SIZE]> {
    let config = crypti2c_cmd_read(session, Zone::Config, 0, ReadSize::Block)?;
    serial_number_from_config(config.as_slice()).ok_or(Crypti2cApiError::UnexpectedResponse {
        expected: ReadSize::Block.len(),
        actual: config.len(),
    })
}

/// Get the device revision word
pub fn crypti2c_cmd_dev_rev(session: &mut Crypti2cSession) -> Crypti2cResult<[u8; DEV_REV_SIZE]> {
    execute_fixed(session, &dev_rev())
}
