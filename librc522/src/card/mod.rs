// librc522/src/card/mod.rs

use crate::Result;
use crate::device::{Device, Initialized};
use crate::types::{AuthMode, BlockAddress, BlockData, Key, Status, Uid};

pub mod layout;
pub mod operations;
pub mod session;

pub use operations::{BlockDump, SectorDump, TextDump, WriteReport};

/// A selected card: what [`Device::detect`] returns.
///
/// The card holds no session state; authentication lives on the chip and is
/// re-checked by every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    uid: Uid,
    sak: u8,
}

impl Card {
    pub fn new(uid: Uid, sak: u8) -> Self {
        Self { uid, sak }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn sak(&self) -> u8 {
        self.sak
    }

    /// SAK 0x08 identifies a MIFARE Classic 1K.
    pub fn is_classic_1k(&self) -> bool {
        self.sak == 0x08
    }

    /// Authenticate the sector holding `block`.
    pub fn authenticate(
        &self,
        device: &mut Device<Initialized>,
        mode: AuthMode,
        block: BlockAddress,
        key: &Key,
    ) -> Result<Status> {
        device.auth(mode, block, key, &self.uid)
    }

    pub fn read_block(
        &self,
        device: &mut Device<Initialized>,
        block: BlockAddress,
    ) -> Result<Option<BlockData>> {
        operations::read_block(device, block)
    }

    pub fn write_block(
        &self,
        device: &mut Device<Initialized>,
        block: BlockAddress,
        data: &BlockData,
    ) -> Result<Status> {
        operations::write_block(device, block, data)
    }

    /// Fill every data block with `value`.
    pub fn write_all(
        &self,
        device: &mut Device<Initialized>,
        key: &Key,
        value: u8,
    ) -> Result<WriteReport> {
        operations::write_all(device, key, &self.uid, value)
    }

    pub fn write_text(
        &self,
        device: &mut Device<Initialized>,
        key: &Key,
        text: &str,
    ) -> Result<WriteReport> {
        operations::write_text(device, key, &self.uid, text)
    }

    pub fn dump(&self, device: &mut Device<Initialized>, key: &Key) -> Result<Vec<SectorDump>> {
        operations::dump(device, key, &self.uid)
    }

    pub fn dump_data(&self, device: &mut Device<Initialized>, key: &Key) -> Result<Vec<BlockDump>> {
        operations::dump_data(device, key, &self.uid)
    }

    pub fn dump_text(&self, device: &mut Device<Initialized>, key: &Key) -> Result<TextDump> {
        operations::dump_text(device, key, &self.uid)
    }

    /// Halt the card and end any crypto session.
    pub fn halt(&self, device: &mut Device<Initialized>) -> Result<Status> {
        let status = device.halt()?;
        device.stop_crypto1()?;
        Ok(status)
    }
}
