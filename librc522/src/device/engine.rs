// librc522/src/device/engine.rs

//! Command/response engine.
//!
//! Every card command goes through [`Device::transceive`]: load the FIFO,
//! start a chip command, wait on the IRQ register with a bounded budget,
//! then classify the outcome and drain whatever the card sent back.

use log::debug;

use crate::Result;
use crate::constants::{
    BIT_FRAMING_START_SEND, COMMAND_ERROR_MASK, ERR_IRQ, FIFO_FLUSH, FIFO_LEVEL_MASK,
    FIFO_MAX_LEN, IDLE_IRQ, IRQ_SET, LO_ALERT_IRQ, RX_IRQ, RX_LAST_BITS_MASK, TIMER_IRQ, TX_IRQ,
};
use crate::device::handle::{Device, Initialized};
use crate::types::{PcdCommand, Register, Status};
use crate::utils::poll_until;

/// Outcome of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardResponse {
    pub status: Status,
    /// Bytes drained from the FIFO (at most 16). Empty unless a transceive
    /// completed with `Status::Ok`.
    pub data: Vec<u8>,
    /// Received frame length in bits, as reported by the chip.
    pub bits: usize,
}

impl CardResponse {
    fn status_only(status: Status) -> Self {
        Self {
            status,
            data: Vec::new(),
            bits: 0,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// (ComIEnReg enable mask, ComIrqReg bit that signals completion)
fn irq_profile(command: PcdCommand) -> Option<(u8, u8)> {
    match command {
        PcdCommand::MfAuthent => Some((ERR_IRQ | IDLE_IRQ, IDLE_IRQ)),
        PcdCommand::Transceive => Some((
            TIMER_IRQ | ERR_IRQ | LO_ALERT_IRQ | IDLE_IRQ | RX_IRQ | TX_IRQ,
            RX_IRQ,
        )),
        _ => None,
    }
}

/// Frame length in bits from the FIFO level and ControlReg RxLastBits.
pub(crate) fn frame_bits(level: usize, last_bits: u8) -> usize {
    if last_bits != 0 {
        level.saturating_sub(1) * 8 + last_bits as usize
    } else {
        level * 8
    }
}

impl Device<Initialized> {
    /// Run `command` with `send` loaded into the FIFO and collect the card's
    /// answer.
    ///
    /// The tri-state status distinguishes a silent field (`NoTag`, the chip
    /// timer fired) from a garbled or missing answer (`Err`). Exhausting the
    /// poll budget is an `Err` like any other failed exchange. Transport
    /// failures are returned as `Error`.
    pub fn transceive(&mut self, command: PcdCommand, send: &[u8]) -> Result<CardResponse> {
        let profile = irq_profile(command);
        let (irq_en, wait_irq) = profile.unwrap_or((0, 0));

        self.write(Register::ComIEn, irq_en | IRQ_SET)?;
        self.clear_bits(Register::ComIrq, IRQ_SET)?;
        self.set_bits(Register::FifoLevel, FIFO_FLUSH)?;
        self.write(Register::Command, PcdCommand::Idle.code())?;
        self.write_fifo(send)?;
        self.write(Register::Command, command.code())?;
        if command == PcdCommand::Transceive {
            self.set_bits(Register::BitFraming, BIT_FRAMING_START_SEND)?;
        }

        let mut irq = 0u8;
        let completed = match profile {
            Some(_) => {
                let budget = self.config().command_poll_budget;
                poll_until(budget, || {
                    irq = self.read(Register::ComIrq)?;
                    Ok(irq & (TIMER_IRQ | wait_irq) != 0)
                })?
            }
            None => true,
        };

        self.clear_bits(Register::BitFraming, BIT_FRAMING_START_SEND)?;

        if !completed {
            debug!("{:?}: no completion within poll budget", command);
            return Ok(CardResponse::status_only(Status::Err));
        }

        let error = self.read(Register::Error)?;
        if error & COMMAND_ERROR_MASK != 0 {
            debug!("{:?}: error register {:#04x}", command, error);
            return Ok(CardResponse::status_only(Status::Err));
        }

        if irq & TIMER_IRQ != 0 {
            debug!("{:?}: timer expired, no tag", command);
            return Ok(CardResponse::status_only(Status::NoTag));
        }

        if command != PcdCommand::Transceive {
            return Ok(CardResponse::status_only(Status::Ok));
        }

        let level = (self.read(Register::FifoLevel)? & FIFO_LEVEL_MASK) as usize;
        let last_bits = self.read(Register::Control)? & RX_LAST_BITS_MASK;
        let bits = frame_bits(level, last_bits);

        let count = level.min(FIFO_MAX_LEN);
        let mut data = Vec::with_capacity(count);
        for _ in 0..count {
            data.push(self.read(Register::FifoData)?);
        }

        debug!(
            "{:?}: sent {} bytes, received {} bytes / {} bits",
            command,
            send.len(),
            data.len(),
            bits
        );
        Ok(CardResponse {
            status: Status::Ok,
            data,
            bits,
        })
    }
}
