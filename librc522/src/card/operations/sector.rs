use log::{debug, warn};

use crate::Result;
use crate::card::layout::{DATA_BLOCKS_PER_SECTOR, data_blocks, encode_text, pack_text};
use crate::card::operations::write::write_block;
use crate::device::{Device, Initialized};
use crate::types::{AuthMode, BlockAddress, BlockData, Key, Status, Uid};

/// What a multi-block write did, block by block.
///
/// Authentication failures skip blocks and write failures are recorded; neither
/// aborts the remaining blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Blocks written and acknowledged
    pub written: Vec<BlockAddress>,
    /// Blocks whose write was not acknowledged
    pub failed: Vec<BlockAddress>,
    /// Blocks never attempted because their sector failed to authenticate
    pub skipped: Vec<BlockAddress>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }

    fn record(&mut self, addr: BlockAddress, status: Status) {
        if status.is_ok() {
            self.written.push(addr);
        } else {
            self.failed.push(addr);
        }
    }
}

/// Fill every data block with `value`, authenticating each sector with
/// Key A once. A sector that fails authentication is skipped.
pub fn write_all(
    device: &mut Device<Initialized>,
    key: &Key,
    uid: &Uid,
    value: u8,
) -> Result<WriteReport> {
    let data = BlockData::filled(value);
    let blocks: Vec<BlockAddress> = data_blocks().collect();
    let mut report = WriteReport::default();

    for group in blocks.chunks(DATA_BLOCKS_PER_SECTOR) {
        let first = group[0];
        if device.auth(AuthMode::KeyA, first, key, uid)? != Status::Ok {
            warn!("sector {}: authentication error, skipping", first.sector());
            report.skipped.extend_from_slice(group);
            continue;
        }
        for &addr in group {
            let status = write_block(device, addr, &data)?;
            report.record(addr, status);
        }
    }
    debug!(
        "write_all {:#04x}: {} written, {} failed, {} skipped",
        value,
        report.written.len(),
        report.failed.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Write `text` sequentially from block 4 on, one byte per character and 16
/// characters per block, the last block zero-padded.
///
/// Text longer than the data blocks fails with `TextTooLong`, and a character
/// above U+00FF with `UnencodableChar`, before anything is sent. Key A authentication runs when the next block starts a sector;
/// while a sector is unauthenticated its blocks are skipped.
pub fn write_text(
    device: &mut Device<Initialized>,
    key: &Key,
    uid: &Uid,
    text: &str,
) -> Result<WriteReport> {
    let packed = pack_text(&encode_text(text)?)?;
    let mut report = WriteReport::default();
    let mut status = Status::Err;

    for (addr, block) in data_blocks().zip(packed.iter()) {
        if addr.starts_sector() {
            status = device.auth(AuthMode::KeyA, addr, key, uid)?;
        }
        if status != Status::Ok {
            warn!("block {}: authentication error, skipping", addr);
            report.skipped.push(addr);
            continue;
        }
        let written = write_block(device, addr, block)?;
        report.record(addr, written);
    }
    Ok(report)
}
