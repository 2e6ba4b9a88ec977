// Licensed under the Apache-2.0 license

//! High-level API functions for crypti2c commands
//!
//! Each function builds one command, runs it through a [`Crypti2cSession`] and checks
//! the shape of the reply. A command that completes with anything but success is
//! reported as [`Crypti2cApiError::Status`].

use crypti2c_command_types::{CommandDescriptor, CommandError, CommandStatus};
use crypti2c_osal::OctetBuffer;
use crypti2c_session::{Crypti2cSession, SessionError};
use thiserror::Error;

pub mod device_info;
pub mod mac;
pub mod random;

pub use device_info::*;
pub use mac::*;
pub use random::*;

/// High-level result type for API functions
pub type Crypti2cResult<T> = Result<T, Crypti2cApiError>;

/// API-specific error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Crypti2cApiError {
    /// Invalid request; nothing was sent
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Session layer error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The device completed the command with a failure status
    #[error("command failed: {0}")]
    Status(CommandStatus),

    /// The reply body does not have the length the command defines
    #[error("unexpected response length: expected {expected}, got {actual}")]
    UnexpectedResponse { expected: usize, actual: usize },
}

/// Run `cmd` and return its body, turning any non-success status into an error
fn execute(session: &mut Crypti2cSession, cmd: &CommandDescriptor) -> Crypti2cResult<OctetBuffer> {
    let response = session.execute_command(cmd)?;
    if !response.is_success() {
        return Err(Crypti2cApiError::Status(response.status));
    }
    Ok(response.data)
}

/// Run `cmd` and return its body as an `N`-byte array
fn execute_fixed<const N: usize>(
    session: &mut Crypti2cSession,
    cmd: &CommandDescriptor,
) -> Crypti2cResult<[u8; N]> {
    let data = execute(session, cmd)?;
    data.to_array::<N>()
        .map_err(|_| Crypti2cApiError::UnexpectedResponse {
            expected: N,
            actual: data.len(),
        })
}
