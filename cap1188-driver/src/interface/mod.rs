//! Register access over either CAP1188 transport
//!
//! [`I2cInterface`] and [`SpiInterface`] both implement
//! [`RegisterInterface`], so the device facade is written once against
//! the trait and the transport is fixed by the type chosen at
//! construction.

pub mod i2c;
pub mod spi;

pub use self::i2c::I2cInterface;
pub use self::spi::SpiInterface;

/// Physical transport behind a [`RegisterInterface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportMode {
    /// Two-wire addressed bus (SMBus/I2C)
    I2c,
    /// Four-wire SPI with chip select and command framing
    Spi,
}

/// Single-byte register access
///
/// Implementations perform exactly one logical register transaction per
/// call and never retry. Both transports leave the device registers in
/// the same state for the same sequence of calls.
pub trait RegisterInterface {
    /// Interface associated error type
    type Error;

    /// Transport used by this interface
    fn transport_mode(&self) -> TransportMode;

    /// Read one register
    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error>;

    /// Write one register
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Resynchronise the interface state machine after a device reset
    ///
    /// Only the SPI interface has state to reset.
    fn reset_interface(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: RegisterInterface + ?Sized> RegisterInterface for &mut T {
    type Error = T::Error;

    fn transport_mode(&self) -> TransportMode {
        (**self).transport_mode()
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        (**self).read_register(register)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_register(register, value)
    }

    fn reset_interface(&mut self) -> Result<(), Self::Error> {
        (**self).reset_interface()
    }
}
