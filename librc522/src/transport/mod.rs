// librc522/src/transport/mod.rs

#[cfg(feature = "linux")]
pub mod linux;
pub mod mock;
pub mod spi;
pub mod traits;

#[cfg(feature = "linux")]
pub use linux::LinuxTransport;
pub use mock::MockTransport;
pub use spi::{SpiBus, SpiTransport};
pub use traits::Transport;
