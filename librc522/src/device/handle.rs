// librc522/src/device/handle.rs

use std::marker::PhantomData;

use log::debug;

use crate::Result;
use crate::constants::{TX_CONTROL_ANTENNA, STATUS2_CRYPTO1_ON};
use crate::device::config::DeviceConfig;
use crate::transport::Transport;
use crate::types::{PcdCommand, Register};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Driver handle for one MFRC522. Card operations are only available once
/// the chip has been initialized.
///
/// The chip is a single mutable resource: the handle owns the transport and
/// keeps no cached copy of chip state (in particular no "authenticated"
/// flag), so every decision is made from fresh register reads.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: DeviceConfig,
    _state: PhantomData<State>,
}

impl<S> Device<S> {
    /// Read one register.
    pub fn read(&mut self, reg: Register) -> Result<u8> {
        self.transport.read_register(reg)
    }

    /// Write one register.
    pub fn write(&mut self, reg: Register, value: u8) -> Result<()> {
        self.transport.write_register(reg, value)
    }

    /// Read-modify-write: OR `mask` into `reg`.
    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read(reg)?;
        self.write(reg, current | mask)
    }

    /// Read-modify-write: clear the bits of `mask` in `reg`.
    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let current = self.read(reg)?;
        self.write(reg, current & !mask)
    }

    pub(crate) fn write_fifo(&mut self, data: &[u8]) -> Result<()> {
        self.transport.write_register_bytes(Register::FifoData, data)
    }

    /// Issue the soft-reset command.
    pub fn reset(&mut self) -> Result<()> {
        self.write(Register::Command, PcdCommand::SoftReset.code())
    }

    /// Enable both transmitter drivers. Does nothing if they already are.
    pub fn antenna_on(&mut self) -> Result<()> {
        let tx = self.read(Register::TxControl)?;
        if tx & TX_CONTROL_ANTENNA != TX_CONTROL_ANTENNA {
            self.set_bits(Register::TxControl, TX_CONTROL_ANTENNA)?;
            debug!("antenna on");
        }
        Ok(())
    }

    /// Disable both transmitter drivers. Any card in the field loses power.
    pub fn antenna_off(&mut self) -> Result<()> {
        self.clear_bits(Register::TxControl, TX_CONTROL_ANTENNA)?;
        debug!("antenna off");
        Ok(())
    }

    pub fn antenna_enabled(&mut self) -> Result<bool> {
        Ok(self.read(Register::TxControl)? & TX_CONTROL_ANTENNA == TX_CONTROL_ANTENNA)
    }

    /// Chip version byte (0x91 / 0x92 for genuine MFRC522 silicon).
    pub fn version(&mut self) -> Result<u8> {
        self.read(Register::Version)
    }

    /// Whether the chip reports a running Crypto1 session (Status2Reg).
    pub fn crypto1_active(&mut self) -> Result<bool> {
        Ok(self.read(Register::Status2)? & STATUS2_CRYPTO1_ON != 0)
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Release the reset line, soft-reset, program the timer and modulation
    /// defaults, then switch the antenna on.
    fn run_init(&mut self) -> Result<()> {
        self.transport.set_reset_line(true)?;
        self.reset()?;

        let [reload_high, reload_low] = self.config.timer_reload.to_be_bytes();
        self.write(Register::TMode, self.config.timer_mode)?;
        self.write(Register::TPrescaler, self.config.timer_prescaler)?;
        self.write(Register::TReloadLow, reload_low)?;
        self.write(Register::TReloadHigh, reload_high)?;

        self.write(Register::TxAuto, self.config.tx_auto)?;
        self.write(Register::Mode, self.config.mode)?;
        self.antenna_on()?;
        debug!("chip initialized: {:?}", self.config);
        Ok(())
    }
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance with the default
    /// configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: DeviceConfig) -> Self {
        Self {
            transport,
            config,
            _state: PhantomData,
        }
    }

    /// Run the init sequence. Returns an initialized Device on success.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.run_init()?;
        Ok(Device {
            transport: this.transport,
            config: this.config,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Run the init sequence again, e.g. after the chip was power cycled.
    /// Any authenticated session is lost.
    pub fn reinitialize(&mut self) -> Result<()> {
        self.run_init()
    }

    /// Pulse the hardware reset line low, then re-run the init sequence.
    pub fn hard_reset(&mut self) -> Result<()> {
        self.transport.set_reset_line(false)?;
        self.run_init()
    }

    /// Give the transport back, e.g. to hand the bus to another driver.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}
