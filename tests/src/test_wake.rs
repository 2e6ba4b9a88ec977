// Licensed under the Apache-2.0 license

//! Wake handshake and power state tests

use crate::common::{init_logger, status_frame, MockBus, MockDelay};
use crypti2c_command_types::{random, CommandStatus, DeviceStatus, RandomMode};
use crypti2c_session::{Crypti2cSession, DeviceState, SessionConfig, SessionError};
use crypti2c_transport::{I2cTransport, TransportError};

#[test]
fn test_wake_handshake() {
    init_logger();
    let mut bus = MockBus::new();
    let mut delay = MockDelay::default();
    let mut transport = I2cTransport::new(&mut bus, &mut delay);
    let config = SessionConfig::default().with_wake_delay_us(3000);
    let mut session = Crypti2cSession::with_config(&mut transport, config).unwrap();

    assert_eq!(session.device_state, DeviceState::Unknown);
    session.wake().expect("device should answer the wake pulse");
    assert_eq!(session.device_state, DeviceState::Awake);
    assert_eq!(session.stats.wakes, 1);

    assert_eq!(bus.wakes, 1);
    assert_eq!(delay.waits_us, vec![3000]);
}

#[test]
fn test_wake_rejects_non_awake_reply() {
    init_logger();
    let mut bus = MockBus::new();
    bus.set_wake_reply(status_frame(DeviceStatus::Success));
    let mut delay = MockDelay::default();
    let mut transport = I2cTransport::new(&mut bus, &mut delay);
    let mut session = Crypti2cSession::new(&mut transport);

    assert_eq!(
        session.wake().unwrap_err(),
        SessionError::Transport(TransportError::UnexpectedWakeResponse)
    );
    assert_eq!(session.device_state, DeviceState::Unknown);
}

#[test]
fn test_wake_rejects_corrupted_reply() {
    init_logger();
    let mut bus = MockBus::new();
    bus.set_wake_reply(vec![0x04, 0x11, 0x33, 0x42]);
    let mut delay = MockDelay::default();
    let mut transport = I2cTransport::new(&mut bus, &mut delay);
    let mut session = Crypti2cSession::new(&mut transport);

    assert!(matches!(
        session.wake(),
        Err(SessionError::Transport(
            TransportError::ChecksumMismatch { .. }
        ))
    ));
}

#[test]
fn test_failed_wake_does_not_abort_command() {
    init_logger();
    let mut bus = MockBus::new();
    bus.set_wake_reply(Vec::new());
    bus.push_status(DeviceStatus::Success);
    let mut delay = MockDelay::default();
    let mut transport = I2cTransport::new(&mut bus, &mut delay);
    let mut session = Crypti2cSession::new(&mut transport);

    let rsp = session
        .execute_command(&random(RandomMode::UpdateSeed))
        .unwrap();
    assert_eq!(rsp.status, CommandStatus::Success);
    assert_eq!(session.device_state, DeviceState::Awake);
}

#[test]
fn test_auto_wake_disabled() {
    init_logger();
    let mut bus = MockBus::new();
    bus.push_status(DeviceStatus::Success);
    let mut delay = MockDelay::default();
    let mut transport = I2cTransport::new(&mut bus, &mut delay);
    let config = SessionConfig::default().with_auto_wake(false);
    let mut session = Crypti2cSession::with_config(&mut transport, config).unwrap();

    session
        .execute_command(&random(RandomMode::UpdateSeed))
        .unwrap();
    assert_eq!(bus.wakes, 0);
}

#[test]
fn test_idle_and_sleep() {
    init_logger();
    let mut bus = MockBus::new();
    bus.push_status(DeviceStatus::Success);
    let mut delay = MockDelay::default();
    let mut transport = I2cTransport::new(&mut bus, &mut delay);
    let config = SessionConfig::default().with_idle_after_command(true);
    let mut session = Crypti2cSession::with_config(&mut transport, config).unwrap();

    session
        .execute_command(&random(RandomMode::UpdateSeed))
        .unwrap();
    assert_eq!(session.device_state, DeviceState::Idle);

    session.sleep().unwrap();
    assert_eq!(session.device_state, DeviceState::Asleep);

    assert_eq!(bus.idles, 1);
    assert_eq!(bus.sleeps, 1);
}

#[test]
fn test_asleep_device_is_woken_before_next_command() {
    init_logger();
    let mut bus = MockBus::new();
    bus.push_status(DeviceStatus::Success)
        .push_status(DeviceStatus::Success);
    let mut delay = MockDelay::default();
    let mut transport = I2cTransport::new(&mut bus, &mut delay);
    let mut session = Crypti2cSession::new(&mut transport);

    session
        .execute_command(&random(RandomMode::UpdateSeed))
        .unwrap();
    session.sleep().unwrap();
    session
        .execute_command(&random(RandomMode::UpdateSeed))
        .unwrap();
    assert_eq!(session.stats.wakes, 2);

    assert_eq!(bus.wakes, 2);
}
