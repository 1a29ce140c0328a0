//! Adapters from `embedded-hal` 1.0 to the traits in this crate
//!
//! Most chip HALs implement the `embedded-hal` traits, so wrapping a
//! peripheral in one of these newtypes is usually all the board code has
//! to do:
//!
//! ```ignore
//! let bus = EhI2c::new(i2c);
//! let reset = EhOutputPin::new(reset_pin);
//! let mut touch = Cap1188::new_i2c(bus, I2cAddress::default(), reset);
//! touch.init(&mut EhDelay::new(delay))?;
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;
use embedded_hal::i2c::I2c;
use embedded_hal::spi;

use crate::delay::DelayMs;
use crate::gpio::OutputPin;
use crate::i2c::I2cBus;
use crate::spi::SpiBus;

/// [`I2cBus`] backed by an `embedded_hal::i2c::I2c` implementation
pub struct EhI2c<T>(T);

impl<T> EhI2c<T> {
    /// Wrap an `embedded-hal` I2C bus
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Unwrap the underlying bus
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: I2c> I2cBus for EhI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.write_read(address, write_data, read_buf)
    }
}

/// [`SpiBus`] backed by an `embedded_hal::spi::SpiBus` implementation
///
/// Every operation is flushed before returning so that the caller can
/// release chip select straight afterwards.
pub struct EhSpi<T>(T);

impl<T> EhSpi<T> {
    /// Wrap an `embedded-hal` SPI bus
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Unwrap the underlying bus
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: spi::SpiBus> SpiBus for EhSpi<T> {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)?;
        self.0.flush()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(buf)?;
        self.0.flush()
    }
}

/// [`OutputPin`] backed by an infallible `embedded_hal::digital::OutputPin`
pub struct EhOutputPin<P>(P);

impl<P> EhOutputPin<P> {
    /// Wrap an `embedded-hal` output pin
    pub fn new(inner: P) -> Self {
        Self(inner)
    }

    /// Unwrap the underlying pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> OutputPin for EhOutputPin<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.0.set_high() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.0.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

/// [`DelayMs`] backed by an `embedded_hal::delay::DelayNs` implementation
pub struct EhDelay<D>(D);

impl<D> EhDelay<D> {
    /// Wrap an `embedded-hal` delay provider
    pub fn new(inner: D) -> Self {
        Self(inner)
    }
}

impl<D: DelayNs> DelayMs for EhDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
