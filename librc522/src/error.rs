// librc522/src/error.rs

use thiserror::Error;

/// Hard faults raised by the driver.
///
/// Ordinary protocol outcomes (no card in the field, a bad checksum, a
/// rejected key) are reported through [`crate::Status`] instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no transport configured")]
    MissingTransport,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid block address {0}: expected 0..=63")]
    InvalidBlockAddress(u8),

    #[error("text too long: {len} characters, capacity is {capacity}")]
    TextTooLong { len: usize, capacity: usize },

    /// Tags store one byte per character, so text is limited to Latin-1.
    #[error("character {ch:?} at position {index} does not fit in one byte")]
    UnencodableChar { ch: char, index: usize },

    #[error("authentication failed for block {block}")]
    Authentication { block: u8 },

    #[error("no card detected")]
    NoCard,
}

pub type Result<T> = std::result::Result<T, Error>;
