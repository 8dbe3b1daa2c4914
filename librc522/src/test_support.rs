//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Device, DeviceConfig, Initialized};
use crate::transport::mock::{MockCard, MockTransport};
use crate::types::{AuthMode, BlockAddress, Key, RequestMode, Status};
use crate::{Error, Result};

/// UID of [`sample_card`].
#[doc(hidden)]
pub const SAMPLE_UID: [u8; 4] = [0x12, 0x34, 0x56, 0x78];

/// Blank MIFARE Classic 1K with [`SAMPLE_UID`] and transport keys.
#[doc(hidden)]
pub fn sample_card() -> MockCard {
    MockCard::new(SAMPLE_UID)
}

/// Poll budgets small enough that a stalled simulator fails fast.
#[doc(hidden)]
pub fn fast_config() -> DeviceConfig {
    DeviceConfig::default().with_poll_budgets(64, 16)
}

/// Create and initialize a Device backed by a fresh simulator, optionally
/// with `card` in the field. The returned MockTransport shares state with
/// the device, so tests can inspect the chip and the card afterwards.
#[doc(hidden)]
pub fn initialized_mock_device(
    card: Option<MockCard>,
) -> Result<(MockTransport, Device<Initialized>)> {
    let mock = match card {
        Some(card) => MockTransport::with_card(card),
        None => MockTransport::new(),
    };
    let device = Device::with_config(Box::new(mock.clone()), fast_config()).initialize()?;
    Ok((mock, device))
}

/// Like [`initialized_mock_device`], then select the card and authenticate
/// the sector holding `block` with the default Key A.
#[doc(hidden)]
pub fn authenticated_mock_device(
    card: MockCard,
    block: u8,
) -> Result<(MockTransport, Device<Initialized>)> {
    let (mock, mut device) = initialized_mock_device(Some(card))?;
    let selected = device.detect(RequestMode::Idle)?;
    let block = BlockAddress::new(block)?;
    if device.auth(AuthMode::KeyA, block, &Key::DEFAULT, selected.uid())? != Status::Ok {
        return Err(Error::Authentication {
            block: block.as_u8(),
        });
    }
    Ok((mock, device))
}
