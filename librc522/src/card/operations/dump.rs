use std::fmt::Write as _;

use log::warn;

use crate::card::layout::{SECTOR_COUNT, sector_data_blocks};
use crate::card::operations::read::read_block;
use crate::device::{Device, Initialized};
use crate::types::{AuthMode, BlockAddress, BlockData, Key, Status, Uid};
use crate::{Error, Result};

/// One block of a dump. `data` is `None` when the read failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDump {
    pub addr: BlockAddress,
    pub data: Option<BlockData>,
}

impl BlockDump {
    /// `Block  8 | 00 11 22 ..`
    pub fn render(&self) -> String {
        match &self.data {
            Some(data) => format!("Block{:>3} | {}", self.addr.as_u8(), data.to_hex()),
            None => format!("Block{:>3} | read error", self.addr.as_u8()),
        }
    }
}

/// All blocks of one sector, trailer included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorDump {
    pub sector: u8,
    pub blocks: Vec<BlockDump>,
}

impl SectorDump {
    /// Sector header line followed by one line per block.
    pub fn render(&self) -> String {
        let mut out = format!("{:-^58}\n", format!(" Sector {} ", self.sector));
        for block in &self.blocks {
            let _ = writeln!(out, "{}", block.render());
        }
        out
    }
}

/// Render a whole dump the way a console listing shows it.
pub fn render(sectors: &[SectorDump]) -> String {
    sectors.iter().map(SectorDump::render).collect()
}

fn authenticate_or_abort(
    device: &mut Device<Initialized>,
    block: BlockAddress,
    key: &Key,
    uid: &Uid,
) -> Result<()> {
    if device.auth(AuthMode::KeyA, block, key, uid)? != Status::Ok {
        warn!("dump aborted: authentication error at block {}", block);
        return Err(Error::Authentication {
            block: block.as_u8(),
        });
    }
    Ok(())
}

fn read_into(device: &mut Device<Initialized>, addr: BlockAddress) -> Result<BlockDump> {
    Ok(BlockDump {
        addr,
        data: read_block(device, addr)?,
    })
}

/// Dump all 16 sectors, trailers included, authenticating each with Key A.
///
/// Unlike the write helpers a failed authentication aborts the dump with
/// `Error::Authentication`: a partial dump would read as a complete one.
pub fn dump(device: &mut Device<Initialized>, key: &Key, uid: &Uid) -> Result<Vec<SectorDump>> {
    let mut sectors = Vec::with_capacity(SECTOR_COUNT as usize);
    for sector in 0..SECTOR_COUNT {
        let first = BlockAddress::sector_start(sector)?;
        authenticate_or_abort(device, first, key, uid)?;

        let mut blocks = Vec::with_capacity(BlockAddress::BLOCKS_PER_SECTOR as usize);
        for offset in 0..BlockAddress::BLOCKS_PER_SECTOR {
            let addr = BlockAddress::new(first.as_u8() + offset)?;
            blocks.push(read_into(device, addr)?);
        }
        sectors.push(SectorDump { sector, blocks });
    }
    Ok(sectors)
}

/// Dump the 45 data blocks (sectors 1..=15, trailers omitted).
pub fn dump_data(device: &mut Device<Initialized>, key: &Key, uid: &Uid) -> Result<Vec<BlockDump>> {
    let mut blocks = Vec::new();
    for sector in 1..SECTOR_COUNT {
        let first = BlockAddress::sector_start(sector)?;
        authenticate_or_abort(device, first, key, uid)?;
        for addr in sector_data_blocks(sector) {
            blocks.push(read_into(device, addr)?);
        }
    }
    Ok(blocks)
}

/// Text stored in the data blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDump {
    /// Every byte of every readable block, mapped one-to-one to a char
    pub text: String,
    /// One line per readable block, bytes below 0x20 shown as `.`
    pub lines: Vec<String>,
    /// Blocks that could not be read and are missing from `text`
    pub unreadable: Vec<BlockAddress>,
}

impl TextDump {
    /// `text` up to the first NUL, i.e. what `write_text` stored.
    pub fn trimmed(&self) -> &str {
        self.text.split('\0').next().unwrap_or("")
    }
}

/// Dump the data blocks and interpret them as text.
pub fn dump_text(device: &mut Device<Initialized>, key: &Key, uid: &Uid) -> Result<TextDump> {
    let blocks = dump_data(device, key, uid)?;
    let mut dump = TextDump {
        text: String::with_capacity(blocks.len() * BlockData::LEN),
        lines: Vec::with_capacity(blocks.len()),
        unreadable: Vec::new(),
    };
    for block in blocks {
        match block.data {
            Some(data) => {
                dump.text.push_str(&data.to_text());
                dump.lines.push(data.to_display_text());
            }
            None => dump.unreadable.push(block.addr),
        }
    }
    Ok(dump)
}
