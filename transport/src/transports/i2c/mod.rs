// Licensed under the Apache-2.0 license

//! I2C transport for ATSHA204-class devices

pub mod bus;
pub mod checksum;
pub mod frame;
pub mod response;
pub mod transport;

pub use bus::{Bus, BusError, WordAddress};
pub use frame::{parse_command_frame, serialize, ParsedCommand, WireFrame};
pub use response::{validate_response, ResponseFrame};
pub use transport::{I2cTransport, WAKE_RESPONSE_SIZE};
