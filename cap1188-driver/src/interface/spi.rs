//! SPI register interface (4-wire normal protocol)
//!
//! Each register access is two chip-select frames:
//!
//! ```text
//!  read:   CS↓ 7D <reg> CS↑   CS↓ 7F → <value> CS↑
//!  write:  CS↓ 7D <reg> CS↑   CS↓ 7E <value>   CS↑
//! ```

use cap1188_hal::{OutputPin, SpiBus};
use cap1188_protocol::command::{self, RESET_INTERFACE_FRAME};

use super::{RegisterInterface, TransportMode};

/// CAP1188 on an SPI bus with a dedicated chip-select pin
///
/// Chip select is active low. The pin must be idle high when handed over;
/// it is released after every frame, including frames whose transfer
/// failed.
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS> {
    /// Create an interface from a bus and an idle-high chip-select pin
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Release the bus and chip-select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI: SpiBus, CS: OutputPin> SpiInterface<SPI, CS> {
    /// Run `f` with chip select asserted
    fn frame<T>(
        &mut self,
        f: impl FnOnce(&mut SPI) -> Result<T, SPI::Error>,
    ) -> Result<T, SPI::Error> {
        self.cs.set_low();
        let result = f(&mut self.spi);
        self.cs.set_high();
        result
    }

    fn set_pointer(&mut self, register: u8) -> Result<(), SPI::Error> {
        self.frame(|spi| spi.write(&command::set_address_frame(register)))
    }
}

impl<SPI: SpiBus, CS: OutputPin> RegisterInterface for SpiInterface<SPI, CS> {
    type Error = SPI::Error;

    fn transport_mode(&self) -> TransportMode {
        TransportMode::Spi
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        self.set_pointer(register)?;
        self.frame(|spi| {
            spi.write(&command::read_frame())?;
            let mut buf = [0u8; 1];
            spi.read(&mut buf)?;
            Ok(buf[0])
        })
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.set_pointer(register)?;
        self.frame(|spi| spi.write(&command::write_frame(value)))
    }

    fn reset_interface(&mut self) -> Result<(), Self::Error> {
        self.frame(|spi| spi.write(&RESET_INTERFACE_FRAME))
    }
}
