// librc522/src/transport/traits.rs

use crate::Result;
use crate::types::Register;

/// Transport trait abstracts register I/O away from protocol/device logic.
///
/// The chip is driven entirely through single-register reads and writes;
/// how those reach the silicon (SPI, I2C, a simulator) is up to the
/// implementation.
pub trait Transport {
    /// Read one register.
    fn read_register(&mut self, reg: Register) -> Result<u8>;

    /// Write one register.
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()>;

    /// Write several bytes to the same register, in order. Used to load the
    /// FIFO. Default implementation issues one write per byte.
    fn write_register_bytes(&mut self, reg: Register, values: &[u8]) -> Result<()> {
        for &v in values {
            self.write_register(reg, v)?;
        }
        Ok(())
    }

    /// Drive the chip's NRSTPD line. `true` releases the chip from reset.
    /// Transports without a reset line ignore the call.
    fn set_reset_line(&mut self, _high: bool) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn read_register(&mut self, reg: Register) -> Result<u8> {
        (**self).read_register(reg)
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        (**self).write_register(reg, value)
    }

    fn write_register_bytes(&mut self, reg: Register, values: &[u8]) -> Result<()> {
        (**self).write_register_bytes(reg, values)
    }

    fn set_reset_line(&mut self, high: bool) -> Result<()> {
        (**self).set_reset_line(high)
    }
}
