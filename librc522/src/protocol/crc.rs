// librc522/src/protocol/crc.rs

//! Software CRC_A (ISO/IEC 14443-3 type A).
//!
//! The driver itself lets the chip coprocessor compute CRCs; this reference
//! implementation backs the chip simulator and response verification.

use crc::{Crc, CRC_16_ISO_IEC_14443_3_A};

const CRC_A: Crc<u16> = Crc::<u16>::new(&CRC_16_ISO_IEC_14443_3_A);

/// CRC_A over `data`, low byte first as transmitted on air.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    CRC_A.checksum(data).to_le_bytes()
}

/// Check a frame whose last two bytes are its CRC_A.
pub fn verify_crc_a(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }
    let (payload, tail) = frame.split_at(frame.len() - 2);
    crc_a(payload) == [tail[0], tail[1]]
}

/// Append the CRC_A of `frame` to it.
pub fn append_crc_a(frame: &mut Vec<u8>) {
    let crc = crc_a(frame);
    frame.extend_from_slice(&crc);
}
