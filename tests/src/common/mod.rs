// Licensed under the Apache-2.0 license

//! Common test utilities and mock implementations
//!
//! [`MockBus`] plays the device side of the I2C link. Replies can be scripted frame by
//! frame, or left to a small device model that answers the commands the API issues.

use crypti2c_command_types::{DeviceStatus, Opcode};
use crypti2c_transport::checksum::checksum_bytes;
use crypti2c_transport::{parse_command_frame, Bus, BusError, WordAddress};
use embedded_hal::delay::DelayNs;
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::sync::Once;

static LOGGER: Once = Once::new();

/// Install the test logger once per process
pub fn init_logger() {
    LOGGER.call_once(|| {
        let _ = simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Debug)
            .init();
    });
}

/// Frame a one-byte status response
pub fn status_frame(status: DeviceStatus) -> Vec<u8> {
    data_frame(&[status as u8])
}

/// Frame a response body
pub fn data_frame(body: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(body.len() + 3);
    frame.push((body.len() + 3) as u8);
    frame.extend_from_slice(body);
    let crc = checksum_bytes(&frame);
    frame.extend_from_slice(&crc);
    frame
}

/// Device state the model answers from
#[derive(Debug, Clone)]
pub struct MockDevice {
    pub keys: [[u8; 32]; 16],
    pub config: [u8; 32],
    pub revision: [u8; 4],
    pub random: [u8; 32],
}

impl Default for MockDevice {
    fn default() -> Self {
        let mut keys = [[0u8; 32]; 16];
        for (slot, key) in keys.iter_mut().enumerate() {
            for (i, byte) in key.iter_mut().enumerate() {
                *byte = (slot * 0x10 + i) as u8;
            }
        }

        let mut config = [0u8; 32];
        config[..4].copy_from_slice(&test_constants::SERIAL_LOW);
        config[4..8].copy_from_slice(&test_constants::REVISION);
        config[8..13].copy_from_slice(&test_constants::SERIAL_HIGH);

        Self {
            keys,
            config,
            revision: test_constants::REVISION,
            random: [0x5A; 32],
        }
    }
}

impl MockDevice {
    /// Mode 0 MAC as the device computes it
    pub fn mac(&self, slot: usize, challenge: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.keys[slot]);
        hasher.update(challenge);
        hasher.update([Opcode::Mac as u8, 0x00]);
        hasher.update((slot as u16).to_le_bytes());
        hasher.update([0u8; 11]);
        hasher.update([0xEE]);
        hasher.update([0u8; 4]);
        hasher.update([0x01, 0x23]);
        hasher.update([0u8; 2]);
        hasher.finalize().into()
    }

    fn respond(&self, frame: &[u8]) -> Vec<u8> {
        let cmd = match parse_command_frame(frame) {
            Ok(cmd) => cmd,
            Err(_) => return status_frame(DeviceStatus::CommError),
        };
        let slot = cmd.param2_u16() as usize;

        match Opcode::try_from(cmd.opcode) {
            Ok(Opcode::Mac) if cmd.param1 == 0 && slot < 16 && cmd.payload.len() == 32 => {
                data_frame(&self.mac(slot, cmd.payload.as_slice()))
            }
            Ok(Opcode::CheckMac) if slot < 16 && cmd.payload.len() == 77 => {
                let payload = cmd.payload.as_slice();
                if self.mac(slot, &payload[..32]) == payload[32..64] {
                    status_frame(DeviceStatus::Success)
                } else {
                    status_frame(DeviceStatus::CheckMacMiscompare)
                }
            }
            Ok(Opcode::Random) => data_frame(&self.random),
            Ok(Opcode::Nonce) if cmd.param1 == 0x03 => status_frame(DeviceStatus::Success),
            Ok(Opcode::Nonce) => data_frame(&self.random),
            Ok(Opcode::DevRev) => data_frame(&self.revision),
            Ok(Opcode::Read) if cmd.param1 == 0x80 => data_frame(&self.config),
            Ok(Opcode::Read) if cmd.param1 == 0x00 => {
                let start = (slot * 4).min(28);
                data_frame(&self.config[start..start + 4])
            }
            _ => status_frame(DeviceStatus::ParseError),
        }
    }
}

/// Mock I2C bus for testing
#[derive(Debug, Default)]
pub struct MockBus {
    /// Scripted command replies, consumed one per command write
    replies: VecDeque<Vec<u8>>,
    /// Bytes available to the next read
    pending: VecDeque<u8>,
    /// Answer commands the script does not cover
    device: Option<MockDevice>,
    /// Every write, word address included
    pub writes: Vec<Vec<u8>>,
    pub wakes: usize,
    pub idles: usize,
    pub sleeps: usize,
    /// Reply to a wake pulse with this frame instead of the awake status
    wake_reply: Option<Vec<u8>>,
    /// Number of upcoming writes to refuse
    failing_writes: usize,
    /// Number of upcoming writes cut short at `accept` bytes
    short_writes: usize,
    accept: usize,
}

impl MockBus {
    /// Bus whose device answers only from the script
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus backed by the device model
    pub fn with_device(device: MockDevice) -> Self {
        Self {
            device: Some(device),
            ..Default::default()
        }
    }

    /// Queue a raw reply for the next command
    pub fn push_reply(&mut self, frame: Vec<u8>) -> &mut Self {
        self.replies.push_back(frame);
        self
    }

    pub fn push_status(&mut self, status: DeviceStatus) -> &mut Self {
        self.push_reply(status_frame(status))
    }

    pub fn set_wake_reply(&mut self, frame: Vec<u8>) {
        self.wake_reply = Some(frame);
    }

    pub fn fail_next_writes(&mut self, count: usize) {
        self.failing_writes = count;
    }

    /// Report only `accept` bytes written for the next `count` writes; the device sees nothing
    pub fn short_next_writes(&mut self, count: usize, accept: usize) {
        self.short_writes = count;
        self.accept = accept;
    }

    /// Command frames written so far, word address stripped
    pub fn commands(&self) -> Vec<&[u8]> {
        self.writes
            .iter()
            .filter_map(|w| match w.split_first() {
                Some((&addr, frame)) if addr == WordAddress::Command as u8 => Some(frame),
                _ => None,
            })
            .collect()
    }

    fn load(&mut self, bytes: &[u8]) {
        self.pending = bytes.iter().copied().collect();
    }
}

impl Bus for MockBus {
    fn wake(&mut self) -> Result<(), BusError> {
        self.wakes += 1;
        let reply = self
            .wake_reply
            .clone()
            .unwrap_or_else(|| status_frame(DeviceStatus::Awake));
        self.load(&reply);
        Ok(())
    }

    fn idle(&mut self) -> Result<(), BusError> {
        self.idles += 1;
        Ok(())
    }

    fn sleep(&mut self) -> Result<(), BusError> {
        self.sleeps += 1;
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<usize, BusError> {
        self.writes.push(bytes.to_vec());
        if self.failing_writes > 0 {
            self.failing_writes -= 1;
            return Err(BusError::Nack);
        }
        if self.short_writes > 0 {
            self.short_writes -= 1;
            return Ok(self.accept.min(bytes.len()));
        }

        if let Some((&addr, frame)) = bytes.split_first() {
            if addr == WordAddress::Command as u8 {
                let reply = match self.replies.pop_front() {
                    Some(reply) => reply,
                    None => match &self.device {
                        Some(device) => device.respond(frame),
                        None => Vec::new(),
                    },
                };
                self.load(&reply);
            }
        }
        Ok(bytes.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, BusError> {
        let n = buffer.len().min(self.pending.len());
        for (slot, byte) in buffer.iter_mut().zip(self.pending.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

/// Delay provider that records instead of sleeping
#[derive(Debug, Default)]
pub struct MockDelay {
    pub waits_us: Vec<u32>,
}

impl MockDelay {
    pub fn total_us(&self) -> u64 {
        self.waits_us.iter().map(|us| u64::from(*us)).sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_us.push(ns / 1000);
    }

    fn delay_us(&mut self, us: u32) {
        self.waits_us.push(us);
    }
}

/// Test constants
pub mod test_constants {
    pub const SERIAL_LOW: [u8; 4] = [0x01, 0x23, 0x6A, 0x4B];
    pub const SERIAL_HIGH: [u8; 5] = [0x11, 0x22, 0x33, 0x44, 0xEE];
    pub const REVISION: [u8; 4] = [0x00, 0x00, 0x00, 0x04];
    pub const CHALLENGE: [u8; 32] = [0x3C; 32];
}
