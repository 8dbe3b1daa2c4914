// librc522/src/card/session.rs

//! ISO 14443-3 session commands: request, anticollision, select,
//! authentication and the teardown of a crypto session.

use log::{debug, warn};

use crate::card::Card;
use crate::constants::{ATQA_BITS, SAK_FRAME_BITS, STATUS2_CRYPTO1_ON};
use crate::device::engine::CardResponse;
use crate::device::{Device, Initialized};
use crate::protocol::picc::PiccCommand;
use crate::types::{AuthMode, BlockAddress, Key, Register, RequestMode, Status, Uid};
use crate::{Error, Result};

impl Device<Initialized> {
    /// Encode `cmd`, append a chip-computed CRC_A when the frame needs one
    /// and run it through the engine.
    pub(crate) fn send_picc(&mut self, cmd: &PiccCommand) -> Result<CardResponse> {
        let mut frame = cmd.encode();
        if cmd.needs_crc() {
            self.append_crc(&mut frame)?;
        }
        self.transceive(cmd.pcd_command(), &frame)
    }

    /// Send REQA/WUPA as a 7-bit short frame. Only an answer of exactly 16
    /// bits (the ATQA) counts as success; anything else, a silent field
    /// included, is `Status::Err`.
    pub fn request(&mut self, mode: RequestMode) -> Result<Status> {
        let cmd = PiccCommand::Request(mode);
        self.write(Register::BitFraming, cmd.tx_last_bits())?;
        let resp = self.send_picc(&cmd)?;
        if resp.status != Status::Ok || resp.bits != ATQA_BITS {
            debug!("request: {:?}, {} bits", resp.status, resp.bits);
            return Ok(Status::Err);
        }
        Ok(Status::Ok)
    }

    /// Run cascade level 1 anticollision. Returns the 5-byte frame (UID and
    /// BCC) as received, even when the BCC check fails; gate on the status.
    pub fn anticoll(&mut self) -> Result<(Status, Vec<u8>)> {
        self.write(Register::BitFraming, 0x00)?;
        let resp = self.send_picc(&PiccCommand::Anticoll)?;
        let mut status = resp.status;
        if status == Status::Ok {
            if resp.data.len() == 5 {
                let bcc = resp.data[..4].iter().fold(0, |acc, b| acc ^ b);
                if bcc != resp.data[4] {
                    debug!(
                        "anticoll: bcc mismatch, got {:#04x} expected {:#04x}",
                        resp.data[4], bcc
                    );
                    status = Status::Err;
                }
            } else {
                debug!("anticoll: {} bytes instead of 5", resp.data.len());
                status = Status::Err;
            }
        }
        Ok((status, resp.data))
    }

    /// Select the card with `uid`. Returns its SAK, or 0 if the card did not
    /// answer with a 24-bit SAK frame.
    pub fn select_tag(&mut self, uid: &Uid) -> Result<u8> {
        let resp = self.send_picc(&PiccCommand::Select(*uid))?;
        if resp.status == Status::Ok && resp.bits == SAK_FRAME_BITS {
            if let Some(&sak) = resp.data.first() {
                return Ok(sak);
            }
        }
        debug!("select {}: no SAK ({:?}, {} bits)", uid, resp.status, resp.bits);
        Ok(0)
    }

    /// Authenticate the sector holding `block` with `key`. The chip runs the
    /// Crypto1 handshake itself.
    ///
    /// An OK status without the chip's MFCrypto1On flag is logged; callers
    /// that need certainty can check [`Device::crypto1_active`].
    pub fn auth(
        &mut self,
        mode: AuthMode,
        block: BlockAddress,
        key: &Key,
        uid: &Uid,
    ) -> Result<Status> {
        let resp = self.send_picc(&PiccCommand::Authenticate {
            mode,
            block,
            key: *key,
            uid: *uid,
        })?;
        if resp.status != Status::Ok {
            warn!("authentication of block {} failed: {:?}", block, resp.status);
            return Ok(resp.status);
        }
        if self.read(Register::Status2)? & STATUS2_CRYPTO1_ON == 0 {
            warn!(
                "authentication of block {} returned OK but crypto1 is not running",
                block
            );
        }
        Ok(Status::Ok)
    }

    /// End the authenticated session.
    pub fn stop_crypto1(&mut self) -> Result<()> {
        self.clear_bits(Register::Status2, STATUS2_CRYPTO1_ON)
    }

    /// Put the selected card to sleep. A halted card only answers WUPA.
    ///
    /// A card acknowledges HALT by staying silent, so `NoTag` from the
    /// engine is reported as `Ok`.
    pub fn halt(&mut self) -> Result<Status> {
        let resp = self.send_picc(&PiccCommand::Halt)?;
        Ok(match resp.status {
            Status::NoTag => Status::Ok,
            Status::Ok => {
                debug!("halt: card answered {} bits", resp.bits);
                Status::Err
            }
            Status::Err => Status::Err,
        })
    }

    /// Request, anticollision and select in one call.
    pub fn detect(&mut self, mode: RequestMode) -> Result<Card> {
        if self.request(mode)? != Status::Ok {
            return Err(Error::NoCard);
        }
        let (status, frame) = self.anticoll()?;
        if status != Status::Ok {
            return Err(Error::NoCard);
        }
        let uid = Uid::try_from(frame.as_slice())?;
        let sak = self.select_tag(&uid)?;
        if sak == 0 {
            return Err(Error::NoCard);
        }
        debug!("card {} selected, sak {:#04x}", uid, sak);
        Ok(Card::new(uid, sak))
    }
}
