use librc522::protocol::PiccCommand;
use librc522::types::{AuthMode, BlockAddress, Key, PcdCommand, RequestMode, Uid};

#[test]
fn session_frames() {
    assert_eq!(PiccCommand::Request(RequestMode::Idle).encode(), vec![0x26]);
    assert_eq!(PiccCommand::Request(RequestMode::All).encode(), vec![0x52]);
    assert_eq!(PiccCommand::Anticoll.encode(), vec![0x93, 0x20]);

    let uid = Uid::from_bytes([0x12, 0x34, 0x56, 0x78]);
    assert_eq!(
        PiccCommand::Select(uid).encode(),
        vec![0x93, 0x70, 0x12, 0x34, 0x56, 0x78, 0x08]
    );
    assert_eq!(PiccCommand::Halt.encode(), vec![0x50, 0x00]);
}

#[test]
fn authenticate_frame_layout() {
    let cmd = PiccCommand::Authenticate {
        mode: AuthMode::KeyB,
        block: BlockAddress::new(11).unwrap(),
        key: Key::from_bytes([1, 2, 3, 4, 5, 6]),
        uid: Uid::from_bytes([0xA, 0xB, 0xC, 0xD]),
    };
    assert_eq!(
        cmd.encode(),
        vec![0x61, 11, 1, 2, 3, 4, 5, 6, 0xA, 0xB, 0xC, 0xD]
    );
    assert_eq!(cmd.pcd_command(), PcdCommand::MfAuthent);
    assert!(!cmd.needs_crc());
}

#[test]
fn block_frames_need_crc() {
    let addr = BlockAddress::new(8).unwrap();
    for cmd in [PiccCommand::Read(addr), PiccCommand::Write(addr)] {
        assert!(cmd.needs_crc());
        assert_eq!(cmd.pcd_command(), PcdCommand::Transceive);
        assert_eq!(cmd.encode()[1], 8);
    }
    assert_eq!(PiccCommand::Read(addr).command_code(), 0x30);
    assert_eq!(PiccCommand::Write(addr).command_code(), 0xA0);
}

#[test]
fn only_requests_are_short_frames() {
    assert_eq!(PiccCommand::Request(RequestMode::Idle).tx_last_bits(), 7);
    assert_eq!(PiccCommand::Anticoll.tx_last_bits(), 0);
    assert_eq!(PiccCommand::Halt.tx_last_bits(), 0);
}
