use librc522::transport::Transport;
use librc522::transport::mock::{CardState, MockCard, MockResponse, MockTransport, RegisterAccess};
use librc522::types::{PcdCommand, Register};

fn start_transceive(m: &mut MockTransport, frame: &[u8], last_bits: u8) {
    m.write_register(Register::FifoLevel, 0x80).unwrap();
    m.write_register_bytes(Register::FifoData, frame).unwrap();
    m.write_register(Register::Command, PcdCommand::Transceive.code())
        .unwrap();
    m.write_register(Register::BitFraming, 0x80 | last_bits)
        .unwrap();
}

#[test]
fn records_accesses_in_order() {
    let mut m = MockTransport::new();
    m.write_register(Register::TPrescaler, 0x3E).unwrap();
    let v = m.read_register(Register::TPrescaler).unwrap();
    assert_eq!(v, 0x3E);
    assert_eq!(
        m.accesses(),
        vec![
            RegisterAccess::Write(Register::TPrescaler, 0x3E),
            RegisterAccess::Read(Register::TPrescaler, 0x3E),
        ]
    );
}

#[test]
fn scripted_response_overrides_card() {
    let mut m = MockTransport::with_card(MockCard::new([9, 9, 9, 9]));
    m.poke(Register::TxControl, 0x83);
    m.push_response(MockResponse::bytes(vec![0xAA; 3]));
    start_transceive(&mut m, &[0x26], 7);
    assert_eq!(m.read_register(Register::FifoLevel).unwrap(), 3);
    // the card never saw the request
    assert_eq!(m.card().unwrap().state, CardState::Idle);
}

#[test]
fn partial_frame_sets_rx_last_bits() {
    let mut m = MockTransport::new();
    m.push_response(MockResponse::Frame {
        bytes: vec![0x0A],
        last_bits: 4,
    });
    start_transceive(&mut m, &[0xA0, 0x04], 0);
    assert_eq!(m.peek(Register::Control) & 0x07, 4);
}

#[test]
fn card_swap_mid_test() {
    let m = MockTransport::with_card(MockCard::new([1, 1, 1, 1]));
    let old = m.remove_card().unwrap();
    assert_eq!(old.uid, [1, 1, 1, 1]);
    assert!(m.card().is_none());
    m.insert_card(MockCard::new([2, 2, 2, 2]));
    m.with_card_mut(|c| c.set_key_b(1, [7; 6]));
    assert_eq!(m.card().unwrap().key_b(1), [7; 6]);
}

#[test]
fn fifo_overflow_flags_error() {
    let mut m = MockTransport::new();
    m.write_register_bytes(Register::FifoData, &[0u8; 65]).unwrap();
    assert_eq!(m.peek(Register::Error) & 0x10, 0x10);
    m.write_register(Register::FifoLevel, 0x80).unwrap();
    assert_eq!(m.peek(Register::Error) & 0x10, 0);
}
