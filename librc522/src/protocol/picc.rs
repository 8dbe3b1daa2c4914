// librc522/src/protocol/picc.rs

//! Frames sent to the card (PICC), before CRC_A is appended.

use crate::constants::*;
use crate::types::{AuthMode, BlockAddress, Key, PcdCommand, RequestMode, Uid};

/// High-level PICC command. Each variant knows its wire encoding, which
/// chip command carries it and whether it needs a CRC_A trailer.
#[derive(Debug, Clone)]
pub enum PiccCommand {
    Request(RequestMode),
    Anticoll,
    Select(Uid),
    Authenticate {
        mode: AuthMode,
        block: BlockAddress,
        key: Key,
        uid: Uid,
    },
    Read(BlockAddress),
    Write(BlockAddress),
    Halt,
}

impl PiccCommand {
    /// First byte of the frame as defined by ISO 14443-3 / MIFARE.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Request(mode) => *mode as u8,
            Self::Anticoll => PICC_ANTICOLL,
            Self::Select(_) => PICC_SELECTTAG,
            Self::Authenticate { mode, .. } => *mode as u8,
            Self::Read(_) => PICC_READ,
            Self::Write(_) => PICC_WRITE,
            Self::Halt => PICC_HALT,
        }
    }

    /// Encode the frame without CRC.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Request(mode) => vec![*mode as u8],
            Self::Anticoll => vec![PICC_ANTICOLL, PICC_ANTICOLL_NVB],
            Self::Select(uid) => {
                let mut buf = vec![PICC_SELECTTAG, PICC_SELECT_NVB];
                buf.extend_from_slice(&uid.to_frame());
                buf
            }
            Self::Authenticate {
                mode,
                block,
                key,
                uid,
            } => {
                let mut buf = vec![*mode as u8, block.as_u8()];
                buf.extend_from_slice(key.as_bytes());
                buf.extend_from_slice(uid.as_bytes());
                buf
            }
            Self::Read(block) => vec![PICC_READ, block.as_u8()],
            Self::Write(block) => vec![PICC_WRITE, block.as_u8()],
            Self::Halt => vec![PICC_HALT, 0x00],
        }
    }

    /// Whether the frame carries a CRC_A computed by the chip.
    pub fn needs_crc(&self) -> bool {
        matches!(
            self,
            Self::Select(_) | Self::Read(_) | Self::Write(_) | Self::Halt
        )
    }

    /// Chip command used to exchange this frame. Authentication runs on the
    /// chip's own MFAuthent command; everything else is a plain transceive.
    pub fn pcd_command(&self) -> PcdCommand {
        match self {
            Self::Authenticate { .. } => PcdCommand::MfAuthent,
            _ => PcdCommand::Transceive,
        }
    }

    /// Value for BitFramingReg.TxLastBits: requests are 7-bit short frames.
    pub fn tx_last_bits(&self) -> u8 {
        match self {
            Self::Request(_) => SHORT_FRAME_BITS,
            _ => 0x00,
        }
    }
}
