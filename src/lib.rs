// Licensed under the Apache-2.0 license

//! crypti2c Host Library
//!
//! Talks to ATSHA204-class authentication chips over I2C and reproduces their MAC on
//! the host for challenge-response verification.
//!
//! - **osal**: owned byte buffers that wipe themselves, and delay providers
//! - **command-types**: opcodes, command descriptors, builders and status codes
//! - **transport**: frame codec, CRC-16, response validation and the I2C transport
//! - **session**: bounded-retry command execution
//! - **commands**: challenge-response digest engine and high-level API functions
//!
//! ## Architecture Overview
//!
//! ```text
//!     ┌─────────────────┐    ┌─────────────────┐
//!     │ crypti2c-       │    │ crypti2c-       │
//!     │ commands        │    │ command-types   │
//!     │ (High-level API)│    │ (Type Defs)     │
//!     └─────────────────┘    └─────────────────┘
//!              │                       │
//!              └───────────────────────┘
//!                          │
//!             ┌──────────────────┐
//!             │ crypti2c-        │
//!             │ session          │
//!             │ (Retry Engine)   │
//!             └──────────────────┘
//!                      │
//!             ┌──────────────────┐
//!             │ crypti2c-        │         ┌─────────────────┐
//!             │ transport        │◄────────│ Bus             │
//!             │ (I2C framing)    │         │ (i2c-dev, mock) │
//!             └──────────────────┘         └─────────────────┘
//!                      │
//!             ┌──────────────────┐
//!             │ crypti2c-osal    │
//!             │ (OS Abstraction) │
//!             └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crypti2c::{crypti2c_cmd_challenge_response, Crypti2cSession, I2cTransport, StdDelay};
//!
//! // Implement Bus for your platform's I2C driver
//! struct LinuxI2c { /* ... */ }
//! impl Bus for LinuxI2c { /* ... */ }
//!
//! let mut bus = LinuxI2c::open("/dev/i2c-1", 0x64)?;
//! let mut delay = StdDelay::new();
//! let mut transport = I2cTransport::new(&mut bus, &mut delay);
//! let mut session = Crypti2cSession::new(&mut transport);
//!
//! let genuine = crypti2c_cmd_challenge_response(&mut session, &challenge, &key, 0)?;
//! ```

// Re-export main public APIs for convenience
pub use crypti2c_command_types::{
    CommandDescriptor, CommandStatus, DeviceStatus, Opcode, RandomMode, ReadSize, Zone,
};
pub use crypti2c_commands::api::{
    crypti2c_cmd_challenge_response, crypti2c_cmd_check_mac, crypti2c_cmd_dev_rev,
    crypti2c_cmd_mac, crypti2c_cmd_nonce_passthrough, crypti2c_cmd_nonce_random,
    crypti2c_cmd_random, crypti2c_cmd_read, crypti2c_cmd_serial_number,
};
pub use crypti2c_commands::{
    compute_challenge_response_digest, verify_default_challenge_response,
    ChallengeResponseEngine, DigestProvider, Sha256Provider,
};
pub use crypti2c_osal::{OctetBuffer, StdDelay};
pub use crypti2c_session::{CommandResponse, Crypti2cSession, SessionConfig};
pub use crypti2c_transport::{serialize, validate_response, Bus, I2cTransport, Transport};

// Re-export error types
pub use crypti2c_command_types::CommandError;
pub use crypti2c_commands::api::Crypti2cApiError;
pub use crypti2c_session::SessionError;
pub use crypti2c_transport::{BusError, TransportError};
