// librc522/src/transport/linux.rs

//! Linux hardware backend: `spidev` for the bus, `gpiocdev` for NRSTPD.

use gpiocdev::line::{Offset, Value};
use gpiocdev::request::Request;
use log::info;
use spidev::{SpiModeFlags, Spidev, SpidevOptions, SpidevTransfer};

use crate::transport::spi::{ResetLine, SpiBus, SpiTransport};
use crate::{Error, Result};

/// Default SPI clock, matching common MFRC522 breakout wiring.
pub const DEFAULT_SPI_SPEED_HZ: u32 = 1_000_000;

/// `/dev/spidevX.Y` bus in mode 0.
pub struct SpidevBus {
    spi: Spidev,
}

impl SpidevBus {
    pub fn open(path: &str, speed_hz: u32) -> Result<Self> {
        let mut spi = Spidev::open(path)?;
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(speed_hz)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        spi.configure(&options)?;
        info!("spidev: opened {} at {} Hz", path, speed_hz);
        Ok(Self { spi })
    }
}

impl SpiBus for SpidevBus {
    fn transfer(&mut self, frame: [u8; 2]) -> Result<[u8; 2]> {
        let mut rx = [0u8; 2];
        {
            let mut transfer = SpidevTransfer::read_write(&frame, &mut rx);
            self.spi.transfer(&mut transfer)?;
        }
        Ok(rx)
    }
}

/// NRSTPD driven through a GPIO character device line.
pub struct GpioResetLine {
    request: Request,
    offset: Offset,
}

impl GpioResetLine {
    /// Request `offset` on `chip` (e.g. `/dev/gpiochip0`) as an output,
    /// initially high so the chip is not held in reset.
    pub fn open(chip: &str, offset: Offset) -> Result<Self> {
        let request = Request::builder()
            .on_chip(chip)
            .with_consumer("librc522")
            .with_line(offset)
            .as_output(Value::Active)
            .request()
            .map_err(|e| Error::Transport(format!("gpio request failed: {}", e)))?;
        info!("gpio: reset line {} on {}", offset, chip);
        Ok(Self { request, offset })
    }
}

impl ResetLine for GpioResetLine {
    fn set_level(&mut self, high: bool) -> Result<()> {
        let value = if high { Value::Active } else { Value::Inactive };
        self.request
            .set_value(self.offset, value)
            .map_err(|e| Error::Transport(format!("gpio set failed: {}", e)))?;
        Ok(())
    }
}

/// SPI transport over spidev with a GPIO reset line.
pub type LinuxTransport = SpiTransport<SpidevBus, GpioResetLine>;

/// Open the usual Raspberry Pi wiring: `spi_path` for the bus and
/// `reset_offset` on `gpio_chip` for NRSTPD.
pub fn open(spi_path: &str, gpio_chip: &str, reset_offset: Offset) -> Result<LinuxTransport> {
    let bus = SpidevBus::open(spi_path, DEFAULT_SPI_SPEED_HZ)?;
    let reset = GpioResetLine::open(gpio_chip, reset_offset)?;
    Ok(SpiTransport::with_reset_line(bus, reset))
}
