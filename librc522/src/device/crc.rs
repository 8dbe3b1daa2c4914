// librc522/src/device/crc.rs

//! CRC_A through the chip's coprocessor.

use log::debug;

use crate::Result;
use crate::constants::{CRC_IRQ, FIFO_FLUSH};
use crate::device::handle::{Device, Initialized};
use crate::types::{PcdCommand, Register};
use crate::utils::poll_until;

impl Device<Initialized> {
    /// Compute CRC_A over `data` on the chip. Returns `[low, high]`.
    ///
    /// The coprocessor is polled at most `crc_poll_budget` times. If the
    /// done flag never shows up the result registers are read anyway; a
    /// stale CRC then surfaces as a rejected frame further up.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        // Writing the flag with Set2 = 0 clears exactly that flag
        self.write(Register::DivIrq, CRC_IRQ)?;
        self.set_bits(Register::FifoLevel, FIFO_FLUSH)?;
        self.write_fifo(data)?;
        self.write(Register::Command, PcdCommand::CalcCrc.code())?;

        let budget = self.config().crc_poll_budget;
        let done = poll_until(budget, || Ok(self.read(Register::DivIrq)? & CRC_IRQ != 0))?;
        if !done {
            debug!("crc coprocessor did not finish within {} polls", budget);
        }

        let low = self.read(Register::CrcResultLsb)?;
        let high = self.read(Register::CrcResultMsb)?;
        Ok([low, high])
    }

    /// Append the chip-computed CRC_A to `frame`.
    pub fn append_crc(&mut self, frame: &mut Vec<u8>) -> Result<()> {
        let crc = self.calculate_crc(frame)?;
        frame.extend_from_slice(&crc);
        Ok(())
    }
}
