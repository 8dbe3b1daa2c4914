use log::warn;

use crate::Result;
use crate::constants::FIFO_MAX_LEN;
use crate::device::{Device, Initialized};
use crate::protocol::picc::PiccCommand;
use crate::types::{BlockAddress, BlockData, Status};

/// Read one block from the authenticated sector.
///
/// Returns `None` unless the card answered OK with exactly 16 bytes. The
/// engine drains at most 16 bytes, so the CRC_A a real card appends to the
/// block is left in the FIFO.
pub fn read_block(
    device: &mut Device<Initialized>,
    addr: BlockAddress,
) -> Result<Option<BlockData>> {
    let resp = device.send_picc(&PiccCommand::Read(addr))?;
    if resp.status != Status::Ok {
        warn!("error while reading block {}: {:?}", addr, resp.status);
        return Ok(None);
    }
    if resp.data.len() != FIFO_MAX_LEN {
        warn!(
            "block {}: expected {} bytes, got {}",
            addr,
            FIFO_MAX_LEN,
            resp.data.len()
        );
        return Ok(None);
    }
    Ok(BlockData::try_from(resp.data.as_slice()).ok())
}
