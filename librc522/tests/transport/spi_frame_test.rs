#[path = "../common/mod.rs"]
mod common;

use librc522::transport::mock::{MockCard, MockTransport};
use librc522::transport::spi::{ResetLine, SpiBus, SpiTransport, read_frame, write_frame};
use librc522::transport::Transport;
use librc522::types::{Register, RequestMode};
use librc522::{DeviceBuilder, Result};
use proptest::prelude::*;

/// SPI bus that decodes each 2-byte frame and replays it against the
/// register-level simulator, the way the chip's SPI slave would.
struct SimulatedBus {
    chip: MockTransport,
    frames: Vec<[u8; 2]>,
}

impl SpiBus for SimulatedBus {
    fn transfer(&mut self, frame: [u8; 2]) -> Result<[u8; 2]> {
        self.frames.push(frame);
        let addr = (frame[0] & 0x7E) >> 1;
        let reg = Register::from_addr(addr).expect("frame addresses a known register");
        if frame[0] & 0x80 != 0 {
            Ok([0, self.chip.read_register(reg)?])
        } else {
            self.chip.write_register(reg, frame[1])?;
            Ok([0, 0])
        }
    }
}

#[derive(Default)]
struct RecordingLine(Vec<bool>);

impl ResetLine for RecordingLine {
    fn set_level(&mut self, high: bool) -> Result<()> {
        self.0.push(high);
        Ok(())
    }
}

proptest! {
    #[test]
    fn frame_shapes(idx in 0usize..Register::ALL.len(), value in any::<u8>()) {
        let reg = Register::ALL[idx];
        let read = read_frame(reg);
        let write = write_frame(reg, value);
        prop_assert_eq!(read, [((reg.addr() << 1) & 0x7E) | 0x80, 0]);
        prop_assert_eq!(write, [(reg.addr() << 1) & 0x7E, value]);
        prop_assert_eq!(write[0] & 0x81, 0);
    }
}

#[test]
fn version_register_frame() {
    assert_eq!(read_frame(Register::Version), [0xEE, 0x00]);
    assert_eq!(write_frame(Register::Command, 0x0F), [0x02, 0x0F]);
}

#[test]
fn device_over_spi_detects_card() {
    common::init_logger();
    let chip = MockTransport::with_card(MockCard::new(common::sample_uid_bytes()));
    let bus = SimulatedBus {
        chip: chip.clone(),
        frames: Vec::new(),
    };
    let transport = SpiTransport::with_reset_line(bus, RecordingLine::default());
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .build()
        .unwrap();

    let card = dev.detect(RequestMode::Idle).unwrap();
    assert_eq!(card.uid(), &common::sample_uid());
    assert_eq!(card.sak(), 0x08);
    assert_eq!(chip.peek(Register::Mode), 0x3D);
}

#[test]
fn reset_line_is_driven_high_on_init() {
    let chip = MockTransport::new();
    let bus = SimulatedBus {
        chip,
        frames: Vec::new(),
    };
    let mut transport = SpiTransport::with_reset_line(bus, RecordingLine::default());
    transport.set_reset_line(true).unwrap();
    let (bus, line) = transport.into_inner();
    assert_eq!(line.0, vec![true]);
    assert!(bus.frames.is_empty());
}
