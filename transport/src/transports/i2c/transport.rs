// Licensed under the Apache-2.0 license

//! I2C Transport Implementation

use super::bus::{Bus, WordAddress};
use super::frame::WireFrame;
use super::response::{validate_response, ResponseFrame};
use crate::{Transport, TransportError, TransportResult};
use core::time::Duration;
use crypti2c_command_types::{DeviceStatus, MIN_RESPONSE_FRAME_SIZE};
use crypti2c_osal::time::delay_for;
use embedded_hal::delay::DelayNs;
use log::{debug, trace};

/// Length of the reply to a wake pulse
pub const WAKE_RESPONSE_SIZE: usize = MIN_RESPONSE_FRAME_SIZE;

/// I2C transport over a borrowed bus and delay provider
pub struct I2cTransport<'a> {
    bus: &'a mut dyn Bus,
    delay: &'a mut dyn DelayNs,
}

impl<'a> I2cTransport<'a> {
    pub fn new(bus: &'a mut dyn Bus, delay: &'a mut dyn DelayNs) -> Self {
        Self { bus, delay }
    }

    /// Read the count byte, then the rest of the frame it announces
    fn read_frame(&mut self, capacity: usize) -> TransportResult<Vec<u8>> {
        let mut count = [0u8; 1];
        if self.bus.read(&mut count)? == 0 {
            return Err(TransportError::Truncated {
                expected: MIN_RESPONSE_FRAME_SIZE,
                actual: 0,
            });
        }

        let len = count[0] as usize;
        if len < MIN_RESPONSE_FRAME_SIZE || len > capacity {
            return Err(TransportError::InvalidLength {
                count: len,
                capacity,
            });
        }

        let mut raw = vec![0u8; len];
        raw[0] = count[0];
        let read = self.bus.read(&mut raw[1..])?;
        if read < len - 1 {
            return Err(TransportError::Truncated {
                expected: len,
                actual: read + 1,
            });
        }

        trace!("rx {}", hex::encode(&raw));
        Ok(raw)
    }
}

impl Transport for I2cTransport<'_> {
    fn wake(&mut self, wake_delay: Duration) -> TransportResult<()> {
        self.bus.wake()?;
        delay_for(self.delay, wake_delay);

        match self.receive(WAKE_RESPONSE_SIZE)? {
            ResponseFrame::Status(DeviceStatus::Awake) => {
                debug!("device awake");
                Ok(())
            }
            other => {
                debug!("wake answered with {other:?}");
                Err(TransportError::UnexpectedWakeResponse)
            }
        }
    }

    fn idle(&mut self) -> TransportResult<()> {
        self.bus.idle()?;
        Ok(())
    }

    fn sleep(&mut self) -> TransportResult<()> {
        self.bus.sleep()?;
        Ok(())
    }

    fn send(&mut self, frame: &WireFrame) -> TransportResult<()> {
        let mut buf = Vec::with_capacity(frame.len() + 1);
        buf.push(WordAddress::Command as u8);
        buf.extend_from_slice(frame.as_bytes());

        debug!("tx {}", hex::encode(&buf));
        let written = self.bus.write(&buf)?;
        if written != buf.len() {
            return Err(TransportError::ShortWrite {
                written,
                expected: buf.len(),
            });
        }
        Ok(())
    }

    fn wait(&mut self, duration: Duration) {
        delay_for(self.delay, duration);
    }

    fn receive(&mut self, capacity: usize) -> TransportResult<ResponseFrame> {
        let raw = self.read_frame(capacity)?;
        validate_response(&raw, capacity)
    }
}
