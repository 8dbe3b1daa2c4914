// librc522/src/protocol/mod.rs

pub mod crc;
pub mod picc;

pub use self::crc::{append_crc_a, crc_a, verify_crc_a};
pub use self::picc::PiccCommand;
