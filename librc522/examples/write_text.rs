//! Write the command-line arguments as text into the data blocks, or fill
//! every data block with one byte value.
//!
//! Usage:
//!   cargo run -p librc522 --example write_text --features linux -- "Happy birthday"
//!   cargo run -p librc522 --example write_text --features linux -- --fill 0x00

#[path = "common/mod.rs"]
mod common;

use librc522::prelude::*;

fn parse_byte(s: &str) -> anyhow::Result<u8> {
    let bytes = parse_hex(s.trim_start_matches("0x")).map_err(anyhow::Error::msg)?;
    match bytes.as_slice() {
        [b] => Ok(*b),
        _ => anyhow::bail!("expected one byte, got {:?}", s),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut dev = common::open_reader()?;
    let card = common::wait_for_card(&mut dev)?;

    let report = match args.as_slice() {
        [flag, value] if flag == "--fill" => {
            card.write_all(&mut dev, &Key::DEFAULT, parse_byte(value)?)?
        }
        _ => {
            let text = args.join(" ");
            card.write_text(&mut dev, &Key::DEFAULT, &text)?
        }
    };
    println!(
        "{} blocks written, {} failed, {} skipped",
        report.written.len(),
        report.failed.len(),
        report.skipped.len()
    );

    dev.stop_crypto1()?;
    Ok(())
}
