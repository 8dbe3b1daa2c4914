// librc522/src/constants.rs
//! Protocol constants shared by the driver and the chip simulator.

/// PICC command: REQuest type A (idle cards only), sent as a 7-bit short frame
pub const PICC_REQIDL: u8 = 0x26;
/// PICC command: Wake-UP type A (idle and halted cards)
pub const PICC_REQALL: u8 = 0x52;
/// PICC command: anticollision / select, cascade level 1
pub const PICC_ANTICOLL: u8 = 0x93;
pub const PICC_SELECTTAG: u8 = 0x93;
/// Number-of-valid-bits byte for the anticollision frame (2 whole bytes)
pub const PICC_ANTICOLL_NVB: u8 = 0x20;
/// Number-of-valid-bits byte for a full select frame (7 whole bytes)
pub const PICC_SELECT_NVB: u8 = 0x70;
pub const PICC_AUTHENT1A: u8 = 0x60;
pub const PICC_AUTHENT1B: u8 = 0x61;
pub const PICC_READ: u8 = 0x30;
pub const PICC_WRITE: u8 = 0xA0;
pub const PICC_HALT: u8 = 0x50;

/// MIFARE acknowledge nibble
pub const MIFARE_ACK: u8 = 0x0A;
/// Length in bits of a MIFARE ACK/NAK answer
pub const MIFARE_ACK_BITS: usize = 4;

/// ATQA length in bits
pub const ATQA_BITS: usize = 16;
/// SAK + CRC_A length in bits
pub const SAK_FRAME_BITS: usize = 24;

/// Maximum number of bytes drained from the FIFO per response
pub const FIFO_MAX_LEN: usize = 16;
/// Hardware FIFO depth
pub const FIFO_DEPTH: usize = 64;

// ComIrqReg bits
pub const IRQ_SET: u8 = 0x80;
pub const TIMER_IRQ: u8 = 0x01;
pub const ERR_IRQ: u8 = 0x02;
pub const LO_ALERT_IRQ: u8 = 0x04;
pub const IDLE_IRQ: u8 = 0x10;
pub const RX_IRQ: u8 = 0x20;
pub const TX_IRQ: u8 = 0x40;

// DivIrqReg bits
pub const CRC_IRQ: u8 = 0x04;

// ErrorReg bits
pub const PROTOCOL_ERR: u8 = 0x01;
pub const PARITY_ERR: u8 = 0x02;
pub const CRC_ERR: u8 = 0x04;
pub const COLL_ERR: u8 = 0x08;
pub const BUFFER_OVFL: u8 = 0x10;
/// Errors that fail a command: protocol, parity, collision and overflow
pub const COMMAND_ERROR_MASK: u8 = PROTOCOL_ERR | PARITY_ERR | COLL_ERR | BUFFER_OVFL;

/// Status2Reg: MFCrypto1On
pub const STATUS2_CRYPTO1_ON: u8 = 0x08;
/// BitFramingReg: StartSend
pub const BIT_FRAMING_START_SEND: u8 = 0x80;
/// BitFramingReg TxLastBits value for a 7-bit short frame
pub const SHORT_FRAME_BITS: u8 = 0x07;
/// FIFOLevelReg: FlushBuffer
pub const FIFO_FLUSH: u8 = 0x80;
/// FIFOLevelReg: level field
pub const FIFO_LEVEL_MASK: u8 = 0x7F;
/// ControlReg: RxLastBits
pub const RX_LAST_BITS_MASK: u8 = 0x07;
/// TxControlReg: Tx1RFEn | Tx2RFEn
pub const TX_CONTROL_ANTENNA: u8 = 0x03;

/// Default busy-wait budget for command completion
pub const DEFAULT_COMMAND_POLL_BUDGET: u32 = 2000;
/// Default busy-wait budget for the CRC coprocessor
pub const DEFAULT_CRC_POLL_BUDGET: u32 = 255;
