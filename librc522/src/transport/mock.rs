// librc522/src/transport/mock.rs

//! Register-level MFRC522 simulator for tests.
//!
//! The simulator models the parts of the chip the driver touches: the FIFO,
//! the command register, the IRQ registers with their set/clear write
//! semantics, the CRC coprocessor, the timer IRQ raised when nothing
//! answers, and the Status2 crypto flag. An emulated MIFARE Classic 1K card
//! sits in the field and answers transceive frames. Crypto1 itself is not
//! emulated; an authenticated session is plain text here.
//!
//! `MockTransport` is a cheap handle (`Clone`) over shared state so a test
//! can keep one copy for inspection after boxing another into a `Device`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::Result;
use crate::constants::*;
use crate::protocol::crc::{crc_a, verify_crc_a};
use crate::transport::traits::Transport;
use crate::types::{PcdCommand, Register};

/// One register access observed by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    Read(Register, u8),
    Write(Register, u8),
}

/// Scripted answer that overrides the emulated card for one transceive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Answer with `bytes`; `last_bits` valid bits in the final byte (0 = all 8)
    Frame { bytes: Vec<u8>, last_bits: u8 },
    /// Nothing answers; the chip timer fires
    Silence,
    /// A frame arrives but the chip flags the given ErrorReg bits; the FIFO
    /// stays empty
    Error(u8),
}

impl MockResponse {
    pub fn bytes(bytes: Vec<u8>) -> Self {
        Self::Frame {
            bytes,
            last_bits: 0,
        }
    }

    fn nibble(value: u8) -> Self {
        Self::Frame {
            bytes: vec![value],
            last_bits: MIFARE_ACK_BITS as u8,
        }
    }
}

/// ISO 14443-3 card states the emulation distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Idle,
    Ready,
    Active,
    Authenticated { sector: u8 },
    Halted,
}

const NAK: u8 = 0x04;

/// Emulated MIFARE Classic 1K card.
#[derive(Debug, Clone)]
pub struct MockCard {
    pub uid: [u8; 4],
    pub atqa: [u8; 2],
    pub sak: u8,
    pub blocks: Vec<[u8; 16]>,
    pub state: CardState,
    pending_write: Option<u8>,
}

impl MockCard {
    /// Blank card: manufacturer block derived from the UID, zeroed data
    /// blocks, and transport-configuration trailers (keys FF..FF).
    pub fn new(uid: [u8; 4]) -> Self {
        let mut blocks = vec![[0u8; 16]; 64];
        let bcc = uid.iter().fold(0, |acc, b| acc ^ b);
        blocks[0][..4].copy_from_slice(&uid);
        blocks[0][4] = bcc;
        blocks[0][5] = 0x08;
        blocks[0][6] = 0x04;
        for sector in 0..16 {
            blocks[sector * 4 + 3] = [
                0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x07, 0x80, 0x69, 0xFF, 0xFF, 0xFF, 0xFF,
                0xFF, 0xFF,
            ];
        }
        Self {
            uid,
            atqa: [0x04, 0x00],
            sak: 0x08,
            blocks,
            state: CardState::Idle,
            pending_write: None,
        }
    }

    pub fn key_a(&self, sector: u8) -> [u8; 6] {
        let mut key = [0u8; 6];
        key.copy_from_slice(&self.blocks[sector as usize * 4 + 3][..6]);
        key
    }

    pub fn key_b(&self, sector: u8) -> [u8; 6] {
        let mut key = [0u8; 6];
        key.copy_from_slice(&self.blocks[sector as usize * 4 + 3][10..]);
        key
    }

    pub fn set_key_a(&mut self, sector: u8, key: [u8; 6]) {
        self.blocks[sector as usize * 4 + 3][..6].copy_from_slice(&key);
    }

    pub fn set_key_b(&mut self, sector: u8, key: [u8; 6]) {
        self.blocks[sector as usize * 4 + 3][10..].copy_from_slice(&key);
    }

    pub fn block(&self, addr: u8) -> [u8; 16] {
        self.blocks[addr as usize]
    }

    pub fn set_block(&mut self, addr: u8, data: [u8; 16]) {
        self.blocks[addr as usize] = data;
    }

    /// Field loss: the card powers down and comes back idle.
    fn power_cycle(&mut self) {
        self.state = CardState::Idle;
        self.pending_write = None;
    }

    fn authenticated_sector(&self) -> Option<u8> {
        match self.state {
            CardState::Authenticated { sector } => Some(sector),
            _ => None,
        }
    }

    /// MFAuthent payload: mode, block, key (6), uid (4).
    fn authenticate(&mut self, frame: &[u8]) -> bool {
        if frame.len() != 12 || frame[1] >= 64 {
            return false;
        }
        if !matches!(
            self.state,
            CardState::Active | CardState::Authenticated { .. }
        ) {
            return false;
        }
        let sector = frame[1] / 4;
        let expected = match frame[0] {
            PICC_AUTHENT1A => self.key_a(sector),
            PICC_AUTHENT1B => self.key_b(sector),
            _ => return false,
        };
        if frame[2..8] != expected || frame[8..12] != self.uid {
            // a failed handshake drops the card back to idle
            self.power_cycle();
            return false;
        }
        self.state = CardState::Authenticated { sector };
        true
    }

    fn respond(&mut self, frame: &[u8], tx_last_bits: u8) -> MockResponse {
        if tx_last_bits == SHORT_FRAME_BITS {
            return self.respond_short(frame);
        }
        if tx_last_bits != 0 || frame.is_empty() {
            return MockResponse::Silence;
        }

        if let Some(addr) = self.pending_write.take() {
            if frame.len() == 18 && verify_crc_a(frame) {
                self.blocks[addr as usize].copy_from_slice(&frame[..16]);
                return MockResponse::nibble(MIFARE_ACK);
            }
            self.power_cycle();
            return MockResponse::nibble(NAK);
        }

        match (self.state, frame) {
            (CardState::Ready, [PICC_ANTICOLL, PICC_ANTICOLL_NVB]) => {
                let mut out = self.uid.to_vec();
                out.push(self.uid.iter().fold(0, |acc, b| acc ^ b));
                MockResponse::bytes(out)
            }
            (CardState::Ready, [PICC_SELECTTAG, PICC_SELECT_NVB, rest @ ..]) => {
                if frame.len() != 9 || !verify_crc_a(frame) || rest[..4] != self.uid {
                    return MockResponse::Silence;
                }
                self.state = CardState::Active;
                let mut out = vec![self.sak];
                out.extend_from_slice(&crc_a(&[self.sak]));
                MockResponse::bytes(out)
            }
            (CardState::Active | CardState::Authenticated { .. }, [PICC_HALT, 0x00, _, _]) => {
                if verify_crc_a(frame) {
                    self.state = CardState::Halted;
                }
                MockResponse::Silence
            }
            (CardState::Authenticated { .. }, [PICC_READ, addr, _, _]) => {
                let addr = *addr;
                if !verify_crc_a(frame) || addr >= 64 {
                    return MockResponse::nibble(NAK);
                }
                if self.authenticated_sector() != Some(addr / 4) {
                    self.power_cycle();
                    return MockResponse::nibble(NAK);
                }
                let mut data = self.blocks[addr as usize];
                if addr % 4 == 3 {
                    // key A is never readable
                    data[..6].fill(0);
                }
                let mut out = data.to_vec();
                out.extend_from_slice(&crc_a(&data));
                MockResponse::bytes(out)
            }
            (CardState::Authenticated { .. }, [PICC_WRITE, addr, _, _]) => {
                let addr = *addr;
                if !verify_crc_a(frame) || addr == 0 || addr >= 64 {
                    return MockResponse::nibble(NAK);
                }
                if self.authenticated_sector() != Some(addr / 4) {
                    self.power_cycle();
                    return MockResponse::nibble(NAK);
                }
                self.pending_write = Some(addr);
                MockResponse::nibble(MIFARE_ACK)
            }
            _ => MockResponse::Silence,
        }
    }

    fn respond_short(&mut self, frame: &[u8]) -> MockResponse {
        let wakes = match frame {
            [PICC_REQIDL] => matches!(self.state, CardState::Idle | CardState::Ready),
            [PICC_REQALL] => matches!(
                self.state,
                CardState::Idle | CardState::Ready | CardState::Halted
            ),
            _ => false,
        };
        if !wakes {
            return MockResponse::Silence;
        }
        self.state = CardState::Ready;
        MockResponse::bytes(self.atqa.to_vec())
    }
}

/// Power-on register values the driver relies on.
fn reset_registers() -> [u8; 64] {
    let mut regs = [0u8; 64];
    regs[Register::Command.addr() as usize] = 0x20;
    regs[Register::ComIEn.addr() as usize] = 0x80;
    regs[Register::Mode.addr() as usize] = 0x3F;
    regs[Register::TxControl.addr() as usize] = 0x80;
    regs[Register::Version.addr() as usize] = 0x92;
    regs
}

#[derive(Debug)]
struct MockChip {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    card: Option<MockCard>,
    scripted: VecDeque<MockResponse>,
    stalled: bool,
    accesses: Vec<RegisterAccess>,
    reset_line: Vec<bool>,
    executed: Vec<PcdCommand>,
}

impl MockChip {
    fn new(card: Option<MockCard>) -> Self {
        Self {
            regs: reset_registers(),
            fifo: VecDeque::new(),
            card,
            scripted: VecDeque::new(),
            stalled: false,
            accesses: Vec::new(),
            reset_line: Vec::new(),
            executed: Vec::new(),
        }
    }

    fn reg(&self, reg: Register) -> u8 {
        self.regs[reg.addr() as usize]
    }

    fn reg_mut(&mut self, reg: Register) -> &mut u8 {
        &mut self.regs[reg.addr() as usize]
    }

    fn antenna_on(&self) -> bool {
        self.reg(Register::TxControl) & TX_CONTROL_ANTENNA == TX_CONTROL_ANTENNA
    }

    fn raise(&mut self, irq: u8) {
        if !self.stalled {
            *self.reg_mut(Register::ComIrq) |= irq;
        }
    }

    fn read(&mut self, reg: Register) -> u8 {
        let value = match reg {
            Register::FifoData => self.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => (self.fifo.len() as u8) & FIFO_LEVEL_MASK,
            _ => self.reg(reg),
        };
        self.accesses.push(RegisterAccess::Read(reg, value));
        value
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.accesses.push(RegisterAccess::Write(reg, value));
        match reg {
            Register::FifoData => {
                if self.fifo.len() < FIFO_DEPTH {
                    self.fifo.push_back(value);
                } else {
                    *self.reg_mut(Register::Error) |= BUFFER_OVFL;
                }
            }
            Register::FifoLevel => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                    *self.reg_mut(Register::Error) &= !BUFFER_OVFL;
                }
            }
            Register::ComIrq | Register::DivIrq => {
                // bit 7 selects whether the marked bits are set or cleared
                let marked = value & !IRQ_SET;
                let r = self.reg_mut(reg);
                if value & IRQ_SET != 0 {
                    *r |= marked;
                } else {
                    *r &= !marked;
                }
            }
            Register::Status2 => {
                *self.reg_mut(reg) = value;
                if value & STATUS2_CRYPTO1_ON == 0 {
                    if let Some(card) = self.card.as_mut() {
                        if let CardState::Authenticated { .. } = card.state {
                            card.state = CardState::Active;
                        }
                    }
                }
            }
            Register::TxControl => {
                *self.reg_mut(reg) = value;
                if !self.antenna_on() {
                    if let Some(card) = self.card.as_mut() {
                        card.power_cycle();
                    }
                }
            }
            Register::BitFraming => {
                *self.reg_mut(reg) = value;
                let running = PcdCommand::from_code(self.reg(Register::Command));
                if value & BIT_FRAMING_START_SEND != 0 && running == Some(PcdCommand::Transceive) {
                    self.run_transceive();
                }
            }
            Register::Command => {
                *self.reg_mut(reg) = value & 0x0F;
                if let Some(cmd) = PcdCommand::from_code(value) {
                    self.executed.push(cmd);
                    self.run_command(cmd);
                }
            }
            _ => *self.reg_mut(reg) = value,
        }
    }

    fn run_command(&mut self, cmd: PcdCommand) {
        match cmd {
            PcdCommand::SoftReset => {
                self.regs = reset_registers();
                self.fifo.clear();
                if let Some(card) = self.card.as_mut() {
                    card.power_cycle();
                }
                *self.reg_mut(Register::Command) = PcdCommand::Idle.code();
            }
            PcdCommand::CalcCrc => {
                *self.reg_mut(Register::DivIrq) &= !CRC_IRQ;
                let data: Vec<u8> = self.fifo.drain(..).collect();
                let crc = crc_a(&data);
                *self.reg_mut(Register::CrcResultLsb) = crc[0];
                *self.reg_mut(Register::CrcResultMsb) = crc[1];
                if !self.stalled {
                    *self.reg_mut(Register::DivIrq) |= CRC_IRQ;
                }
            }
            PcdCommand::MfAuthent => self.run_authent(),
            // transceive waits for StartSend
            PcdCommand::Transceive => {}
            PcdCommand::Idle | PcdCommand::Transmit | PcdCommand::Receive => {}
        }
    }

    fn run_authent(&mut self) {
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        *self.reg_mut(Register::Error) = 0;
        let antenna = self.antenna_on();
        let Some(card) = self.card.as_mut().filter(|_| antenna) else {
            self.raise(TIMER_IRQ);
            return;
        };
        if card.authenticate(&frame) {
            *self.reg_mut(Register::Status2) |= STATUS2_CRYPTO1_ON;
            self.raise(IDLE_IRQ);
        } else {
            *self.reg_mut(Register::Status2) &= !STATUS2_CRYPTO1_ON;
            *self.reg_mut(Register::Error) |= PROTOCOL_ERR;
            self.raise(ERR_IRQ | IDLE_IRQ);
        }
    }

    fn run_transceive(&mut self) {
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        let tx_last_bits = self.reg(Register::BitFraming) & 0x07;
        *self.reg_mut(Register::Error) = 0;

        let antenna = self.antenna_on();
        let response = match self.scripted.pop_front() {
            Some(r) => r,
            None => match self.card.as_mut() {
                Some(card) if antenna => card.respond(&frame, tx_last_bits),
                _ => MockResponse::Silence,
            },
        };

        match response {
            MockResponse::Frame { bytes, last_bits } => {
                for b in bytes {
                    if self.fifo.len() < FIFO_DEPTH {
                        self.fifo.push_back(b);
                    }
                }
                let control = self.reg_mut(Register::Control);
                *control = (*control & !RX_LAST_BITS_MASK) | (last_bits & RX_LAST_BITS_MASK);
                self.raise(RX_IRQ | IDLE_IRQ);
            }
            MockResponse::Silence => self.raise(TIMER_IRQ),
            MockResponse::Error(bits) => {
                // a damaged frame still ends reception
                *self.reg_mut(Register::Error) |= bits;
                self.raise(RX_IRQ | ERR_IRQ | IDLE_IRQ);
            }
        }
    }
}

/// Mock transport for unit tests: a simulated chip plus optional card.
#[derive(Debug, Clone)]
pub struct MockTransport {
    chip: Rc<RefCell<MockChip>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Chip with an empty field.
    pub fn new() -> Self {
        Self {
            chip: Rc::new(RefCell::new(MockChip::new(None))),
        }
    }

    /// Chip with `card` in the field.
    pub fn with_card(card: MockCard) -> Self {
        Self {
            chip: Rc::new(RefCell::new(MockChip::new(Some(card)))),
        }
    }

    pub fn insert_card(&self, card: MockCard) {
        self.chip.borrow_mut().card = Some(card);
    }

    pub fn remove_card(&self) -> Option<MockCard> {
        self.chip.borrow_mut().card.take()
    }

    /// Snapshot of the card in the field.
    pub fn card(&self) -> Option<MockCard> {
        self.chip.borrow().card.clone()
    }

    /// Mutate the card in place, e.g. to change a key mid-test.
    pub fn with_card_mut<R>(&self, f: impl FnOnce(&mut MockCard) -> R) -> Option<R> {
        self.chip.borrow_mut().card.as_mut().map(f)
    }

    /// Queue an answer for the next transceive, bypassing the card.
    pub fn push_response(&self, response: MockResponse) {
        self.chip.borrow_mut().scripted.push_back(response);
    }

    /// A stalled chip never raises completion IRQs.
    pub fn set_stalled(&self, stalled: bool) {
        self.chip.borrow_mut().stalled = stalled;
    }

    /// Register value without side effects.
    pub fn peek(&self, reg: Register) -> u8 {
        self.chip.borrow().reg(reg)
    }

    /// Set a register directly, without running any side effect.
    pub fn poke(&self, reg: Register, value: u8) {
        *self.chip.borrow_mut().reg_mut(reg) = value;
    }

    pub fn accesses(&self) -> Vec<RegisterAccess> {
        self.chip.borrow().accesses.clone()
    }

    pub fn clear_accesses(&self) {
        self.chip.borrow_mut().accesses.clear();
    }

    /// Values written to `reg`, in order.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.chip
            .borrow()
            .accesses
            .iter()
            .filter_map(|a| match a {
                RegisterAccess::Write(r, v) if *r == reg => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// Number of reads of `reg`.
    pub fn reads_of(&self, reg: Register) -> usize {
        self.chip
            .borrow()
            .accesses
            .iter()
            .filter(|a| matches!(a, RegisterAccess::Read(r, _) if *r == reg))
            .count()
    }

    /// Chip commands executed so far.
    pub fn executed(&self) -> Vec<PcdCommand> {
        self.chip.borrow().executed.clone()
    }

    /// Levels driven on the reset line, in order.
    pub fn reset_line(&self) -> Vec<bool> {
        self.chip.borrow().reset_line.clone()
    }
}

impl Transport for MockTransport {
    fn read_register(&mut self, reg: Register) -> Result<u8> {
        Ok(self.chip.borrow_mut().read(reg))
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        self.chip.borrow_mut().write(reg, value);
        Ok(())
    }

    fn set_reset_line(&mut self, high: bool) -> Result<()> {
        self.chip.borrow_mut().reset_line.push(high);
        Ok(())
    }
}
