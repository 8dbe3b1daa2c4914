// librc522/src/card/layout.rs

//! MIFARE Classic 1K memory layout.
//!
//! 16 sectors of 4 blocks. Block 3 of each sector is the trailer (keys and
//! access bits); sector 0 holds the manufacturer block. What remains for
//! user data is blocks 0..=2 of sectors 1..=15.

use crate::types::{BlockAddress, BlockData};
use crate::{Error, Result};

pub const SECTOR_COUNT: u8 = 16;
pub const DATA_BLOCKS_PER_SECTOR: usize = 3;
pub const DATA_BLOCK_COUNT: usize = DATA_BLOCKS_PER_SECTOR * (SECTOR_COUNT as usize - 1);

/// Addresses of the user data blocks, in write order: 4, 5, 6, 8, 9, 10 ... 62.
pub const DATA_BLOCKS: [u8; DATA_BLOCK_COUNT] = data_block_table();

const fn data_block_table() -> [u8; DATA_BLOCK_COUNT] {
    let mut out = [0u8; DATA_BLOCK_COUNT];
    let mut i = 0;
    while i < DATA_BLOCK_COUNT {
        let sector = (i / DATA_BLOCKS_PER_SECTOR) as u8 + 1;
        out[i] = sector * 4 + (i % DATA_BLOCKS_PER_SECTOR) as u8;
        i += 1;
    }
    out
}

/// Data blocks as typed addresses.
pub fn data_blocks() -> impl Iterator<Item = BlockAddress> {
    // every table entry is below 64
    DATA_BLOCKS.iter().filter_map(|&b| BlockAddress::new(b).ok())
}

/// The data blocks of `sector` (empty for sector 0 and out-of-range sectors).
pub fn sector_data_blocks(sector: u8) -> impl Iterator<Item = BlockAddress> {
    data_blocks().filter(move |b| b.sector() == sector)
}

/// Bytes of text that fit in the data blocks.
pub const fn data_capacity() -> usize {
    DATA_BLOCK_COUNT * BlockData::LEN
}

/// Encode `text` one byte per character (Latin-1), the inverse of
/// [`BlockData::to_text`].
///
/// Capacity is counted in characters and checked first, so an overlong text
/// fails with `TextTooLong` whatever it contains. Characters above U+00FF
/// fail with `UnencodableChar`.
pub fn encode_text(text: &str) -> Result<Vec<u8>> {
    let len = text.chars().count();
    if len > data_capacity() {
        return Err(Error::TextTooLong {
            len,
            capacity: data_capacity(),
        });
    }
    text.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| Error::UnencodableChar { ch, index }))
        .collect()
}

/// Split `bytes` into 16-byte blocks, zero-padding the last one.
///
/// Fails with `TextTooLong` when the input does not fit in the data blocks.
/// Input that is a multiple of 16 bytes gets no padding block.
pub fn pack_text(bytes: &[u8]) -> Result<Vec<BlockData>> {
    if bytes.len() > data_capacity() {
        return Err(Error::TextTooLong {
            len: bytes.len(),
            capacity: data_capacity(),
        });
    }
    Ok(bytes
        .chunks(BlockData::LEN)
        .map(|chunk| {
            let mut block = [0u8; 16];
            block[..chunk.len()].copy_from_slice(chunk);
            BlockData::from_bytes(block)
        })
        .collect())
}
