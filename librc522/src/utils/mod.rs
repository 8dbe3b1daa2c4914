//! Utilities for librc522: small, reusable helpers used across the crate.
//!
//! Hex helpers format UIDs, keys and block dumps; the poll helper is the
//! bounded busy-wait used wherever the driver waits on a chip flag.

pub mod hex;
pub mod poll;

pub use self::hex::*;
pub use self::poll::*;
