// Licensed under the Apache-2.0 license

//! Time and delay abstraction
//!
//! The protocol layers wait through an [`embedded_hal::delay::DelayNs`] so hosts can
//! supply their own timer and tests can record waits instead of sleeping.

use core::time::Duration;
use embedded_hal::delay::DelayNs;

/// Blocking delay backed by `std::thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl StdDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Block on `delay` for `duration`
///
/// Sub-microsecond remainders are dropped; durations beyond `u32::MAX` microseconds are
/// issued as several waits.
pub fn delay_for(delay: &mut dyn DelayNs, duration: Duration) {
    let mut remaining = duration.as_micros();
    while remaining > 0 {
        let chunk = remaining.min(u128::from(u32::MAX)) as u32;
        delay.delay_us(chunk);
        remaining -= u128::from(chunk);
    }
}
