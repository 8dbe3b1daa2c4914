use librc522::transport::Transport;
use librc522::types::{Register, RequestMode};
use librc522::{Device, Error, Result};

/// Transport whose link goes down after a fixed number of accesses.
struct FlakyTransport {
    remaining: usize,
}

impl FlakyTransport {
    fn tick(&mut self) -> Result<()> {
        if self.remaining == 0 {
            return Err(Error::Transport("spi link down".into()));
        }
        self.remaining -= 1;
        Ok(())
    }
}

impl Transport for FlakyTransport {
    fn read_register(&mut self, _reg: Register) -> Result<u8> {
        self.tick()?;
        Ok(0)
    }

    fn write_register(&mut self, _reg: Register, _value: u8) -> Result<()> {
        self.tick()
    }
}

#[test]
fn init_propagates_transport_error() {
    let dev = Device::new_with_transport(Box::new(FlakyTransport { remaining: 3 }));
    assert!(matches!(dev.initialize(), Err(Error::Transport(_))));
}

#[test]
fn transport_error_is_not_a_status() {
    // enough budget to initialize, then fail in the middle of a request
    let dev = Device::new_with_transport(Box::new(FlakyTransport { remaining: 20 }));
    let mut dev = dev.initialize().unwrap();
    let err = dev.request(RequestMode::Idle).unwrap_err();
    assert!(err.to_string().contains("spi link down"));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "/dev/spidev0.0");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io(_)));
}
