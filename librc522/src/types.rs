// librc522/src/types.rs

use crate::Error;
use derive_more::From;
use std::convert::TryFrom;

/// MFRC522 register map.
///
/// Reserved addresses are intentionally absent so every register access in
/// the crate goes through a named, checked address.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    // Command and status
    Command = 0x01,
    ComIEn = 0x02,
    DivIEn = 0x03,
    ComIrq = 0x04,
    DivIrq = 0x05,
    Error = 0x06,
    Status1 = 0x07,
    Status2 = 0x08,
    FifoData = 0x09,
    FifoLevel = 0x0A,
    WaterLevel = 0x0B,
    Control = 0x0C,
    BitFraming = 0x0D,
    Coll = 0x0E,

    // Command configuration
    Mode = 0x11,
    TxMode = 0x12,
    RxMode = 0x13,
    TxControl = 0x14,
    TxAuto = 0x15,
    TxSel = 0x16,
    RxSel = 0x17,
    RxThreshold = 0x18,
    Demod = 0x19,
    Mifare = 0x1C,
    SerialSpeed = 0x1F,

    // Configuration
    CrcResultMsb = 0x21,
    CrcResultLsb = 0x22,
    ModWidth = 0x24,
    RfCfg = 0x26,
    GsN = 0x27,
    CwGsP = 0x28,
    ModGsP = 0x29,
    TMode = 0x2A,
    TPrescaler = 0x2B,
    TReloadHigh = 0x2C,
    TReloadLow = 0x2D,
    TCounterValueHigh = 0x2E,
    TCounterValueLow = 0x2F,

    // Test
    TestSel1 = 0x31,
    TestSel2 = 0x32,
    TestPinEn = 0x33,
    TestPinValue = 0x34,
    TestBus = 0x35,
    AutoTest = 0x36,
    Version = 0x37,
    AnalogTest = 0x38,
    TestDac1 = 0x39,
    TestDac2 = 0x3A,
    TestAdc = 0x3B,
}

impl Register {
    /// Every addressable register, in address order.
    pub const ALL: [Register; 49] = [
        Self::Command,
        Self::ComIEn,
        Self::DivIEn,
        Self::ComIrq,
        Self::DivIrq,
        Self::Error,
        Self::Status1,
        Self::Status2,
        Self::FifoData,
        Self::FifoLevel,
        Self::WaterLevel,
        Self::Control,
        Self::BitFraming,
        Self::Coll,
        Self::Mode,
        Self::TxMode,
        Self::RxMode,
        Self::TxControl,
        Self::TxAuto,
        Self::TxSel,
        Self::RxSel,
        Self::RxThreshold,
        Self::Demod,
        Self::Mifare,
        Self::SerialSpeed,
        Self::CrcResultMsb,
        Self::CrcResultLsb,
        Self::ModWidth,
        Self::RfCfg,
        Self::GsN,
        Self::CwGsP,
        Self::ModGsP,
        Self::TMode,
        Self::TPrescaler,
        Self::TReloadHigh,
        Self::TReloadLow,
        Self::TCounterValueHigh,
        Self::TCounterValueLow,
        Self::TestSel1,
        Self::TestSel2,
        Self::TestPinEn,
        Self::TestPinValue,
        Self::TestBus,
        Self::AutoTest,
        Self::Version,
        Self::AnalogTest,
        Self::TestDac1,
        Self::TestDac2,
        Self::TestAdc,
    ];

    pub const fn addr(self) -> u8 {
        self as u8
    }

    pub fn from_addr(addr: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.addr() == addr)
    }
}

/// PCD (reader chip) command codes written to `CommandReg`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PcdCommand {
    Idle = 0x00,
    CalcCrc = 0x03,
    Transmit = 0x04,
    Receive = 0x08,
    Transceive = 0x0C,
    MfAuthent = 0x0E,
    SoftReset = 0x0F,
}

impl PcdCommand {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x00 => Some(Self::Idle),
            0x03 => Some(Self::CalcCrc),
            0x04 => Some(Self::Transmit),
            0x08 => Some(Self::Receive),
            0x0C => Some(Self::Transceive),
            0x0E => Some(Self::MfAuthent),
            0x0F => Some(Self::SoftReset),
            _ => None,
        }
    }
}

/// Outcome of every card-level protocol operation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The card answered and the answer passed every check
    Ok,
    /// Nothing answered before the chip timer expired
    NoTag,
    /// Something answered, but the answer was unusable
    Err,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// Request command variant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// REQA: only cards in the IDLE state answer
    Idle = 0x26,
    /// WUPA: idle and halted cards answer
    All = 0x52,
}

/// Which sector key to authenticate with.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    KeyA = 0x60,
    KeyB = 0x61,
}

/// Uid - single-size MIFARE UID (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 4]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Block check character: XOR of the four UID bytes.
    pub fn bcc(&self) -> u8 {
        self.0.iter().fold(0, |acc, b| acc ^ b)
    }

    /// UID followed by its BCC, as carried in anticollision/select frames.
    pub fn to_frame(&self) -> [u8; 5] {
        [self.0[0], self.0[1], self.0[2], self.0[3], self.bcc()]
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    /// Accepts a bare 4-byte UID or a 5-byte anticollision frame. The BCC
    /// byte of a 5-byte frame is not checked here.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 && bytes.len() != 5 {
            return Err(Error::InvalidLength {
                expected: 5,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Key - sector key A or B (6 バイト)
#[derive(Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct Key([u8; 6]);

impl Key {
    /// Transport key shipped on blank MIFARE Classic tags.
    pub const DEFAULT: Self = Self([0xFF; 6]);

    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Parse a key written as 12 hex digits, with optional whitespace.
    pub fn from_hex(s: &str) -> crate::Result<Self> {
        let bytes = crate::utils::parse_hex(s).map_err(|_| Error::InvalidLength {
            expected: 6,
            actual: s.len() / 2,
        })?;
        Self::try_from(&bytes[..])
    }
}

// Keys never show up in logs.
impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(******)")
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 6 {
            return Err(Error::InvalidLength {
                expected: 6,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub const LEN: usize = 16;

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn filled(value: u8) -> Self {
        Self([value; 16])
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Upper-case, space separated hex as printed by block dumps.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Interpret every byte as a Latin-1 character.
    pub fn to_text(&self) -> String {
        self.0.iter().map(|&b| b as char).collect()
    }

    /// Like [`to_text`](Self::to_text), but control bytes below 0x20 are
    /// replaced with `.` so the result is safe to print.
    pub fn to_display_text(&self) -> String {
        self.0
            .iter()
            .map(|&b| if b >= 0x20 { b as char } else { '.' })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != Self::LEN {
            return Err(Error::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Address of one of the 64 blocks on a 1K tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockAddress(u8);

impl BlockAddress {
    pub const COUNT: u8 = 64;
    pub const BLOCKS_PER_SECTOR: u8 = 4;

    pub fn new(addr: u8) -> crate::Result<Self> {
        if addr >= Self::COUNT {
            return Err(Error::InvalidBlockAddress(addr));
        }
        Ok(Self(addr))
    }

    /// First block of `sector`.
    pub fn sector_start(sector: u8) -> crate::Result<Self> {
        Self::new(sector.saturating_mul(Self::BLOCKS_PER_SECTOR))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn sector(&self) -> u8 {
        self.0 / Self::BLOCKS_PER_SECTOR
    }

    /// The fourth block of a sector holds the keys and access bits.
    pub fn is_trailer(&self) -> bool {
        self.0 % Self::BLOCKS_PER_SECTOR == Self::BLOCKS_PER_SECTOR - 1
    }

    pub fn starts_sector(&self) -> bool {
        self.0 % Self::BLOCKS_PER_SECTOR == 0
    }

    pub fn trailer(&self) -> Self {
        Self(self.sector() * Self::BLOCKS_PER_SECTOR + Self::BLOCKS_PER_SECTOR - 1)
    }
}

impl TryFrom<u8> for BlockAddress {
    type Error = Error;

    fn try_from(addr: u8) -> Result<Self, Self::Error> {
        Self::new(addr)
    }
}

impl std::fmt::Display for BlockAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
