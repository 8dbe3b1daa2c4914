use log::warn;

use crate::Result;
use crate::constants::{MIFARE_ACK, MIFARE_ACK_BITS};
use crate::device::engine::CardResponse;
use crate::device::{Device, Initialized};
use crate::protocol::picc::PiccCommand;
use crate::types::{BlockAddress, BlockData, PcdCommand, Status};

fn is_ack(resp: &CardResponse) -> bool {
    resp.status == Status::Ok
        && resp.bits == MIFARE_ACK_BITS
        && resp.data.first().is_some_and(|b| b & 0x0F == MIFARE_ACK)
}

/// Write one block of the authenticated sector.
///
/// Two exchanges: the WRITE command, then the 16-byte payload, each
/// answered by a 4-bit ACK. A rejected command skips the payload. A rejected
/// payload is logged and reported as `Status::Err`; nothing is rolled back.
pub fn write_block(
    device: &mut Device<Initialized>,
    addr: BlockAddress,
    data: &BlockData,
) -> Result<Status> {
    let resp = device.send_picc(&PiccCommand::Write(addr))?;
    if !is_ack(&resp) {
        warn!(
            "block {}: write command not acknowledged ({:?}, {} bits)",
            addr, resp.status, resp.bits
        );
        return Ok(Status::Err);
    }

    let mut payload = data.as_bytes().to_vec();
    device.append_crc(&mut payload)?;
    let resp = device.transceive(PcdCommand::Transceive, &payload)?;
    if !is_ack(&resp) {
        warn!("error while writing block {}", addr);
        return Ok(Status::Err);
    }
    Ok(Status::Ok)
}
