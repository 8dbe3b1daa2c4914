#[path = "../common/mod.rs"]
mod common;

use librc522::transport::mock::{CardState, MockResponse};
use librc522::types::{RequestMode, Status, Uid};
use proptest::prelude::*;

proptest! {
    #[test]
    fn anticoll_accepts_frame_iff_bcc_matches(uid in any::<[u8; 4]>(), bcc in any::<u8>()) {
        let (mock, mut dev) = common::empty_field();
        let mut frame = uid.to_vec();
        frame.push(bcc);
        mock.push_response(MockResponse::bytes(frame.clone()));

        let (status, returned) = dev.anticoll().unwrap();
        let expected = uid[0] ^ uid[1] ^ uid[2] ^ uid[3];
        prop_assert_eq!(status == Status::Ok, bcc == expected);
        prop_assert_eq!(returned, frame);
    }

    #[test]
    fn single_bit_flip_in_uid_forces_err(uid in any::<[u8; 4]>(), byte in 0usize..4, bit in 0u8..8) {
        let (mock, mut dev) = common::empty_field();
        let mut frame = Uid::from_bytes(uid).to_frame().to_vec();
        frame[byte] ^= 1 << bit;
        mock.push_response(MockResponse::bytes(frame));

        let (status, _) = dev.anticoll().unwrap();
        prop_assert_eq!(status, Status::Err);
    }

    #[test]
    fn anticoll_rejects_other_lengths(len in 0usize..16) {
        prop_assume!(len != 5);
        let (mock, mut dev) = common::empty_field();
        mock.push_response(MockResponse::bytes(vec![0u8; len]));
        let (status, _) = dev.anticoll().unwrap();
        prop_assert_eq!(status, Status::Err);
    }
}

#[test]
fn full_selection_sequence() {
    common::init_logger();
    let (mock, mut dev) = common::device_with(common::sample_card());

    assert_eq!(dev.request(RequestMode::Idle).unwrap(), Status::Ok);
    let (status, frame) = dev.anticoll().unwrap();
    assert_eq!(status, Status::Ok);
    assert_eq!(frame, common::sample_uid_frame());

    let uid = Uid::try_from(frame.as_slice()).unwrap();
    assert_eq!(dev.select_tag(&uid).unwrap(), 0x08);
    assert_eq!(mock.card().unwrap().state, CardState::Active);
}

#[test]
fn select_with_unknown_uid_returns_zero() {
    let (_mock, mut dev) = common::device_with(common::sample_card());
    let _ = dev.request(RequestMode::Idle).unwrap();
    let _ = dev.anticoll().unwrap();
    let other = Uid::from_bytes([0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(dev.select_tag(&other).unwrap(), 0);
}

#[test]
fn request_all_wakes_halted_card() {
    let (mock, mut dev, card) = common::selected(common::sample_card());
    assert_eq!(card.halt(&mut dev).unwrap(), Status::Ok);
    assert_eq!(mock.card().unwrap().state, CardState::Halted);

    assert_eq!(dev.request(RequestMode::Idle).unwrap(), Status::Err);
    let again = dev.detect(RequestMode::All).unwrap();
    assert_eq!(again.uid(), card.uid());
}
