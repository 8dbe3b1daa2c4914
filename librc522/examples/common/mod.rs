// Shared setup for the examples: logging plus the usual Raspberry Pi
// wiring (SPI0 CE0, reset on GPIO 25). Override with RC522_SPI,
// RC522_GPIOCHIP and RC522_RESET.

use std::thread;
use std::time::Duration;

use librc522::prelude::*;
use librc522::transport::linux;

pub fn open_reader() -> anyhow::Result<Device<Initialized>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let spi = std::env::var("RC522_SPI").unwrap_or_else(|_| "/dev/spidev0.0".into());
    let chip = std::env::var("RC522_GPIOCHIP").unwrap_or_else(|_| "/dev/gpiochip0".into());
    let reset = std::env::var("RC522_RESET")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(25);

    let transport = linux::open(&spi, &chip, reset)?;
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .build()?;
    println!("MFRC522 version {:#04x}", dev.version()?);
    Ok(dev)
}

/// Poll the field until a card is selected.
pub fn wait_for_card(dev: &mut Device<Initialized>) -> anyhow::Result<Card> {
    println!("Hold a tag near the reader");
    loop {
        match dev.detect(RequestMode::Idle) {
            Ok(card) => {
                println!("Card detected, UID {}", card.uid());
                return Ok(card);
            }
            Err(Error::NoCard) => thread::sleep(Duration::from_millis(100)),
            Err(e) => return Err(e.into()),
        }
    }
}
