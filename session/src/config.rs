// Licensed under the Apache-2.0 license

//! Session configuration

use crate::{SessionError, SessionResult};
use core::time::Duration;
use crypti2c_transport::DEFAULT_WAKE_DELAY;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Session configuration
///
/// Loadable from TOML; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Total send attempts per command, the first one included
    pub max_attempts: u8,
    /// Time between the wake pulse and reading the wake reply
    pub wake_delay_us: u32,
    /// Wake the device before a command unless it is known to be awake
    pub auto_wake: bool,
    /// Put the device in idle once a command completes
    pub idle_after_command: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            wake_delay_us: DEFAULT_WAKE_DELAY.as_micros() as u32,
            auto_wake: true,
            idle_after_command: false,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: u8) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_wake_delay_us(mut self, wake_delay_us: u32) -> Self {
        self.wake_delay_us = wake_delay_us;
        self
    }

    pub fn with_auto_wake(mut self, auto_wake: bool) -> Self {
        self.auto_wake = auto_wake;
        self
    }

    pub fn with_idle_after_command(mut self, idle_after_command: bool) -> Self {
        self.idle_after_command = idle_after_command;
        self
    }

    pub fn wake_delay(&self) -> Duration {
        Duration::from_micros(u64::from(self.wake_delay_us))
    }

    pub fn validate(&self) -> SessionResult<()> {
        if self.max_attempts == 0 {
            return Err(SessionError::Configuration(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> SessionResult<Self> {
        let config: SessionConfig = toml::from_str(contents)
            .map_err(|err| SessionError::Configuration(format!("failed to parse TOML: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SessionResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            SessionError::Configuration(format!(
                "failed to read config file {:?}: {err}",
                path.as_ref()
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SessionResult<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|err| SessionError::Configuration(format!("failed to serialize: {err}")))?;
        std::fs::write(path.as_ref(), contents).map_err(|err| {
            SessionError::Configuration(format!(
                "failed to write config file {:?}: {err}",
                path.as_ref()
            ))
        })
    }
}
