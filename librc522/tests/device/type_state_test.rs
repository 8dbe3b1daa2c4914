#[path = "../common/mod.rs"]
mod common;

use librc522::device::{Device, DeviceBuilder, DeviceConfig};
use librc522::transport::mock::MockTransport;
use librc522::types::{PcdCommand, Register};
use librc522::Error;

#[test]
fn initialize_transitions_and_programs_chip() {
    common::init_logger();
    let mock = MockTransport::new();
    let boxed: Box<dyn librc522::transport::Transport> = Box::new(mock.clone());
    let device = Device::new_with_transport(boxed);

    // Uninitialized device already exposes register access
    assert_eq!(device.config(), &DeviceConfig::default());

    let mut initialized = device.initialize().unwrap();
    assert_eq!(initialized.version().unwrap(), 0x92);
    assert_eq!(mock.reset_line(), vec![true]);
    assert_eq!(mock.executed()[0], PcdCommand::SoftReset);
    assert_eq!(mock.peek(Register::TMode), 0x8D);
    assert_eq!(mock.peek(Register::TPrescaler), 0x3E);
    assert_eq!(mock.peek(Register::TReloadLow), 30);
    assert_eq!(mock.peek(Register::TReloadHigh), 0);
    assert_eq!(mock.peek(Register::TxAuto), 0x40);
    assert_eq!(mock.peek(Register::Mode), 0x3D);
    assert!(initialized.antenna_enabled().unwrap());
}

#[test]
fn init_writes_happen_after_soft_reset() {
    let mock = MockTransport::new();
    let _dev = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build()
        .unwrap();

    let accesses = mock.accesses();
    let reset_at = accesses
        .iter()
        .position(|a| {
            *a == librc522::transport::mock::RegisterAccess::Write(
                Register::Command,
                PcdCommand::SoftReset.code(),
            )
        })
        .unwrap();
    let tmode_at = accesses
        .iter()
        .position(|a| {
            matches!(a, librc522::transport::mock::RegisterAccess::Write(Register::TMode, _))
        })
        .unwrap();
    assert!(reset_at < tmode_at);
}

#[test]
fn custom_config_is_programmed() {
    let mock = MockTransport::new();
    let config = DeviceConfig {
        timer_reload: 0x0123,
        ..DeviceConfig::default()
    };
    let _dev = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_config(config)
        .build()
        .unwrap();
    assert_eq!(mock.peek(Register::TReloadHigh), 0x01);
    assert_eq!(mock.peek(Register::TReloadLow), 0x23);
}

#[test]
fn reinitialize_restores_programming() {
    let mock = MockTransport::new();
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build()
        .unwrap();
    dev.write(Register::TPrescaler, 0x00).unwrap();
    dev.reset().unwrap();
    assert_eq!(mock.peek(Register::Mode), 0x3F);

    dev.reinitialize().unwrap();
    assert_eq!(mock.peek(Register::TPrescaler), 0x3E);
    assert_eq!(mock.peek(Register::Mode), 0x3D);
}

#[test]
fn builder_without_transport_fails() {
    assert!(matches!(
        DeviceBuilder::new().build(),
        Err(Error::MissingTransport)
    ));
}
