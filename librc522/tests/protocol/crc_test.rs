#[path = "../common/mod.rs"]
mod common;

use librc522::protocol::{append_crc_a, crc_a, verify_crc_a};
use proptest::prelude::*;

#[test]
fn known_vectors() {
    // HALT and READ block 0 as sent by every reader
    assert_eq!(crc_a(&[0x50, 0x00]), [0x57, 0xCD]);
    assert_eq!(crc_a(&[0x30, 0x00]), [0x02, 0xA8]);
    // SAK 0x08 answer from a Classic 1K
    assert_eq!(crc_a(&[0x08]), [0xB6, 0xDD]);
}

#[test]
fn hex_frames_verify() {
    let select = hex::decode("93701234567808").unwrap();
    let mut framed = select.clone();
    append_crc_a(&mut framed);
    assert_eq!(hex::encode(&framed[..7]), "93701234567808");
    assert!(verify_crc_a(&framed));

    let halt = hex::decode("500057cd").unwrap();
    assert!(verify_crc_a(&halt));
}

#[test]
fn append_then_verify() {
    let mut frame = vec![0x93, 0x70, 0x12, 0x34, 0x56, 0x78, 0x08];
    append_crc_a(&mut frame);
    assert_eq!(frame.len(), 9);
    assert!(verify_crc_a(&frame));
    frame[3] ^= 0x01;
    assert!(!verify_crc_a(&frame));
}

proptest! {
    #[test]
    fn chip_crc_matches_software(data in proptest::collection::vec(any::<u8>(), 0..60)) {
        let (_mock, mut dev) = common::empty_field();
        prop_assert_eq!(dev.calculate_crc(&data).unwrap(), crc_a(&data));
    }
}
