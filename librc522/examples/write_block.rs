//! Read block 8, overwrite it with 0xFF, read it back, then clear it.
//!
//! Usage:
//!   cargo run -p librc522 --example write_block --features linux

#[path = "common/mod.rs"]
mod common;

use librc522::prelude::*;

fn show(label: &str, data: Option<BlockData>) {
    match data {
        Some(d) => println!("{label}: {}", d.to_hex()),
        None => println!("{label}: read failed"),
    }
}

fn main() -> anyhow::Result<()> {
    let mut dev = common::open_reader()?;
    let card = common::wait_for_card(&mut dev)?;
    let block = BlockAddress::new(8)?;

    if card.authenticate(&mut dev, AuthMode::KeyA, block, &Key::DEFAULT)? != Status::Ok {
        anyhow::bail!("authentication of sector {} failed", block.sector());
    }

    show("Sector 8 before", card.read_block(&mut dev, block)?);

    println!("Writing 0xFF to block 8");
    card.write_block(&mut dev, block, &BlockData::filled(0xFF))?;
    show("Sector 8 now", card.read_block(&mut dev, block)?);

    println!("Clearing block 8");
    card.write_block(&mut dev, block, &BlockData::filled(0x00))?;
    show("Sector 8 cleared", card.read_block(&mut dev, block)?);

    dev.stop_crypto1()?;
    Ok(())
}
