// librc522/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod crc;
pub mod engine;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use engine::CardResponse;
pub use handle::{Device, Initialized, Uninitialized};
