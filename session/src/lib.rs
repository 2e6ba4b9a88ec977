// Licensed under the Apache-2.0 license

//! Session Management
//!
//! Runs commands against the device with bounded retry. One call to
//! [`Crypti2cSession::execute_command`] drives the exchange
//! `Idle -> Sent -> AwaitingResponse` once per attempt and stops at the first terminal
//! device status. Transient failures (NAK, communication error, an unexpected awake
//! reply, anything the transport rejects) wake the device again and resend.

use core::time::Duration;
use crypti2c_command_types::{CommandDescriptor, CommandError, CommandStatus, Disposition};
use crypti2c_osal::OctetBuffer;
use crypti2c_transport::{serialize, ResponseFrame, Transport, TransportError, WireFrame};
use log::{debug, error, warn};
use thiserror::Error;

pub mod config;

pub use config::SessionConfig;

/// Session error enumeration
///
/// Device and bus failures inside a command are not errors; they come back as a
/// [`CommandStatus`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The command was malformed; nothing was sent
    #[error(transparent)]
    Command(#[from] CommandError),

    /// A direct power-state request failed
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Session result type
pub type SessionResult<T> = Result<T, SessionError>;

/// Power state of the device as far as the host knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceState {
    #[default]
    Unknown,
    Awake,
    Idle,
    Asleep,
}

/// Position within a single command exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    Sent,
    AwaitingResponse,
}

impl ExchangeState {
    /// State entered once the current step completes
    pub fn advance(self) -> Self {
        match self {
            ExchangeState::Idle => ExchangeState::Sent,
            ExchangeState::Sent => ExchangeState::AwaitingResponse,
            ExchangeState::AwaitingResponse => ExchangeState::Idle,
        }
    }
}

/// Session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStatistics {
    pub commands_sent: u64,
    pub commands_succeeded: u64,
    pub commands_failed: u64,
    /// Frames written, retries included
    pub attempts: u64,
    pub retries: u64,
    pub wakes: u64,
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

/// Outcome of a command that ran to completion
#[derive(Debug, Clone)]
pub struct CommandResponse {
    pub status: CommandStatus,
    /// Response body; empty unless the device returned data
    pub data: OctetBuffer,
    /// Send attempts used
    pub attempts: u8,
}

impl CommandResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Device session using dynamic dispatch with borrowed transport
///
/// The borrow is held for the session's lifetime, so a transport cannot be driven by two
/// sessions at once.
pub struct Crypti2cSession<'t> {
    transport: &'t mut dyn Transport,

    /// Session configuration
    pub config: SessionConfig,

    pub device_state: DeviceState,
    exchange_state: ExchangeState,

    /// Terminal status of the most recent command
    pub last_status: Option<CommandStatus>,

    /// Statistics
    pub stats: SessionStatistics,
}

impl<'t> Crypti2cSession<'t> {
    /// Create a new session with borrowed transport and default configuration
    pub fn new(transport: &'t mut dyn Transport) -> Self {
        Self {
            transport,
            config: SessionConfig::default(),
            device_state: DeviceState::Unknown,
            exchange_state: ExchangeState::Idle,
            last_status: None,
            stats: SessionStatistics::default(),
        }
    }

    /// Create session with custom configuration
    pub fn with_config(
        transport: &'t mut dyn Transport,
        config: SessionConfig,
    ) -> SessionResult<Self> {
        config.validate()?;
        let mut session = Self::new(transport);
        session.config = config;
        Ok(session)
    }

    /// Position within the current exchange; `Idle` between commands
    pub fn exchange_state(&self) -> ExchangeState {
        self.exchange_state
    }

    /// Wake the device and check its wake reply
    pub fn wake(&mut self) -> SessionResult<()> {
        self.stats.wakes += 1;
        match self.transport.wake(self.config.wake_delay()) {
            Ok(()) => {
                self.device_state = DeviceState::Awake;
                Ok(())
            }
            Err(err) => {
                self.device_state = DeviceState::Unknown;
                Err(err.into())
            }
        }
    }

    /// Idle the device; TempKey and other volatile state survive
    pub fn idle(&mut self) -> SessionResult<()> {
        self.transport.idle()?;
        self.device_state = DeviceState::Idle;
        Ok(())
    }

    /// Put the device to sleep
    pub fn sleep(&mut self) -> SessionResult<()> {
        self.transport.sleep()?;
        self.device_state = DeviceState::Asleep;
        Ok(())
    }

    /// Execute a command with retry
    ///
    /// Returns `Err` only for malformed commands, before any bus traffic. Every other
    /// outcome, including running out of attempts, is a [`CommandStatus`].
    pub fn execute_command(&mut self, cmd: &CommandDescriptor) -> SessionResult<CommandResponse> {
        cmd.validate()?;
        let frame = serialize(cmd)?;
        let capacity = cmd.response_frame_len();
        let max_attempts = self.config.max_attempts.max(1);

        self.stats.commands_sent += 1;
        if self.config.auto_wake && self.device_state != DeviceState::Awake {
            if let Err(err) = self.wake() {
                warn!("wake before opcode {:#04x} failed: {err}", cmd.opcode);
            }
        }

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                self.stats.retries += 1;
                if let Err(err) = self.wake() {
                    warn!("re-wake before attempt {attempt} failed: {err}");
                }
            }

            self.stats.attempts += 1;
            match self.exchange(&frame, cmd.exec_time, capacity) {
                Ok(ResponseFrame::Data(data)) => {
                    return Ok(self.complete(CommandStatus::Success, data, attempt));
                }
                Ok(ResponseFrame::Status(device_status)) => match device_status.disposition() {
                    Disposition::Complete(status) => {
                        return Ok(self.complete(status, OctetBuffer::new(), attempt));
                    }
                    Disposition::Retry => {
                        warn!(
                            "opcode {:#04x} attempt {attempt}/{max_attempts}: device replied {device_status:?}",
                            cmd.opcode
                        );
                    }
                },
                Err(err) => {
                    self.device_state = DeviceState::Unknown;
                    warn!(
                        "opcode {:#04x} attempt {attempt}/{max_attempts}: {err}",
                        cmd.opcode
                    );
                }
            }
        }

        error!(
            "opcode {:#04x} failed after {max_attempts} attempts",
            cmd.opcode
        );
        Ok(self.complete(
            CommandStatus::CommunicationError,
            OctetBuffer::new(),
            max_attempts,
        ))
    }

    /// One pass through the exchange state machine
    fn exchange(
        &mut self,
        frame: &WireFrame,
        exec_time: Duration,
        capacity: usize,
    ) -> Result<ResponseFrame, TransportError> {
        self.exchange_state = ExchangeState::Idle;
        self.transport.send(frame)?;
        self.stats.bytes_sent += frame.len() as u64;

        self.exchange_state = self.exchange_state.advance();
        self.transport.wait(exec_time);

        self.exchange_state = self.exchange_state.advance();
        let response = self.transport.receive(capacity);
        self.exchange_state = self.exchange_state.advance();

        let response = response?;
        self.stats.bytes_received += match &response {
            ResponseFrame::Status(_) => 4,
            ResponseFrame::Data(data) => data.len() as u64 + 3,
        };
        self.device_state = DeviceState::Awake;
        Ok(response)
    }

    fn complete(&mut self, status: CommandStatus, data: OctetBuffer, attempts: u8) -> CommandResponse {
        if status.is_success() {
            self.stats.commands_succeeded += 1;
            debug!("command complete after {attempts} attempt(s), {} byte(s)", data.len());
        } else {
            self.stats.commands_failed += 1;
            debug!("command ended with {status} after {attempts} attempt(s)");
        }
        self.last_status = Some(status);

        if self.config.idle_after_command {
            if let Err(err) = self.idle() {
                warn!("idle after command failed: {err}");
            }
        }

        CommandResponse {
            status,
            data,
            attempts,
        }
    }
}
