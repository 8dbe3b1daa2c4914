// Shared setup for hardware tests: open the reader from env variables.

use librc522::device::{DeviceBuilder, Initialized};
use librc522::transport::linux;
use librc522::Device;

pub fn open_reader() -> anyhow::Result<Device<Initialized>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let spi = std::env::var("RC522_SPI").unwrap_or_else(|_| "/dev/spidev0.0".into());
    let chip = std::env::var("RC522_GPIOCHIP").unwrap_or_else(|_| "/dev/gpiochip0".into());
    let reset: u32 = std::env::var("RC522_RESET")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(25);
    let transport = linux::open(&spi, &chip, reset)?;
    Ok(DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .build()?)
}
