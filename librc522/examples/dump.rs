//! Dump a MIFARE Classic 1K tag: every sector as hex, then the data blocks
//! as text.
//!
//! Usage:
//!   cargo run -p librc522 --example dump --features linux

#[path = "common/mod.rs"]
mod common;

use librc522::prelude::*;
use librc522::card::operations::render;

fn main() -> anyhow::Result<()> {
    let mut dev = common::open_reader()?;
    let card = common::wait_for_card(&mut dev)?;

    let sectors = card.dump(&mut dev, &Key::DEFAULT)?;
    print!("{}", render(&sectors));

    let text = card.dump_text(&mut dev, &Key::DEFAULT)?;
    println!("{:-^58}", " Text ");
    for line in &text.lines {
        println!("{}", line);
    }
    if !text.unreadable.is_empty() {
        println!("unreadable blocks: {:?}", text.unreadable);
    }

    dev.stop_crypto1()?;
    Ok(())
}
