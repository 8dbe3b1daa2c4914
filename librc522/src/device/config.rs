// librc522/src/device/config.rs

use crate::constants::{DEFAULT_COMMAND_POLL_BUDGET, DEFAULT_CRC_POLL_BUDGET};

/// TModeReg: TAuto, prescaler high nibble 0x0D
pub const DEFAULT_TIMER_MODE: u8 = 0x8D;
/// TPrescalerReg: with TMode gives a ~30 kHz timer clock
pub const DEFAULT_TIMER_PRESCALER: u8 = 0x3E;
/// TReloadReg: 30 ticks, roughly 1 ms of silence before the timer IRQ
pub const DEFAULT_TIMER_RELOAD: u16 = 30;
/// TxASKReg: force 100% ASK modulation
pub const DEFAULT_TX_AUTO: u8 = 0x40;
/// ModeReg: CRC preset 0x6363 as required by ISO 14443-3
pub const DEFAULT_MODE: u8 = 0x3D;

/// Chip programming applied by `initialize`, plus the busy-wait budgets.
///
/// The budgets count register reads, not time. Tests running against the
/// simulator usually shrink them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Reads of ComIrqReg before a command is considered lost
    pub command_poll_budget: u32,
    /// Reads of DivIrqReg while waiting on the CRC coprocessor
    pub crc_poll_budget: u32,
    pub timer_mode: u8,
    pub timer_prescaler: u8,
    pub timer_reload: u16,
    pub tx_auto: u8,
    pub mode: u8,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            command_poll_budget: DEFAULT_COMMAND_POLL_BUDGET,
            crc_poll_budget: DEFAULT_CRC_POLL_BUDGET,
            timer_mode: DEFAULT_TIMER_MODE,
            timer_prescaler: DEFAULT_TIMER_PRESCALER,
            timer_reload: DEFAULT_TIMER_RELOAD,
            tx_auto: DEFAULT_TX_AUTO,
            mode: DEFAULT_MODE,
        }
    }
}

impl DeviceConfig {
    pub fn with_poll_budgets(mut self, command: u32, crc: u32) -> Self {
        self.command_poll_budget = command;
        self.crc_poll_budget = crc;
        self
    }
}
