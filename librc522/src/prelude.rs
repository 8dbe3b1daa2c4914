// librc522/src/prelude.rs

pub use crate::card::{BlockDump, Card, SectorDump, TextDump, WriteReport};
pub use crate::device::{Device, DeviceBuilder, DeviceConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::PiccCommand;
pub use crate::transport::Transport;
pub use crate::{
    AuthMode, BlockAddress, BlockData, Error, Key, PcdCommand, Register, RequestMode, Result,
    Status, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex, poll_until};
