// librc522/src/transport/spi.rs

//! Register access over SPI.
//!
//! Every access is one 2-byte full-duplex transfer: the register address
//! shifted left by one (MSB set for reads), then the data byte. On reads the
//! second byte clocked back is the register value.

use log::trace;

use crate::Result;
use crate::transport::traits::Transport;
use crate::types::Register;

const READ_FLAG: u8 = 0x80;
const ADDRESS_MASK: u8 = 0x7E;

/// Full-duplex SPI bus able to exchange a 2-byte frame.
pub trait SpiBus {
    fn transfer(&mut self, frame: [u8; 2]) -> Result<[u8; 2]>;
}

/// Output line wired to the chip's NRSTPD pin.
pub trait ResetLine {
    fn set_level(&mut self, high: bool) -> Result<()>;
}

/// Reset line placeholder for boards that tie NRSTPD high.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResetLine;

impl ResetLine for NoResetLine {
    fn set_level(&mut self, _high: bool) -> Result<()> {
        Ok(())
    }
}

/// Frame that reads `reg`.
pub fn read_frame(reg: Register) -> [u8; 2] {
    [((reg.addr() << 1) & ADDRESS_MASK) | READ_FLAG, 0x00]
}

/// Frame that writes `value` to `reg`.
pub fn write_frame(reg: Register, value: u8) -> [u8; 2] {
    [(reg.addr() << 1) & ADDRESS_MASK, value]
}

/// [`Transport`] over an [`SpiBus`] plus an optional reset line.
pub struct SpiTransport<B, R = NoResetLine> {
    bus: B,
    reset: R,
}

impl<B: SpiBus> SpiTransport<B, NoResetLine> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            reset: NoResetLine,
        }
    }
}

impl<B: SpiBus, R: ResetLine> SpiTransport<B, R> {
    pub fn with_reset_line(bus: B, reset: R) -> Self {
        Self { bus, reset }
    }

    pub fn into_inner(self) -> (B, R) {
        (self.bus, self.reset)
    }
}

impl<B: SpiBus, R: ResetLine> Transport for SpiTransport<B, R> {
    fn read_register(&mut self, reg: Register) -> Result<u8> {
        let rx = self.bus.transfer(read_frame(reg))?;
        trace!("read  {:?} -> {:#04x}", reg, rx[1]);
        Ok(rx[1])
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        trace!("write {:?} <- {:#04x}", reg, value);
        self.bus.transfer(write_frame(reg, value))?;
        Ok(())
    }

    fn set_reset_line(&mut self, high: bool) -> Result<()> {
        self.reset.set_level(high)
    }
}
