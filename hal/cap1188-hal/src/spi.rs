//! SPI bus abstraction
//!
//! Chip select is not part of the bus. The CAP1188 command framing needs
//! the driver to toggle it around every command, so it is passed
//! separately as an [`OutputPin`](crate::gpio::OutputPin). The device
//! expects SPI mode 0 (clock idle low, data sampled on the rising edge).

/// SPI bus master
///
/// Each call must finish clocking before it returns, so that chip select
/// can be released straight afterwards.
pub trait SpiBus {
    /// Bus error
    type Error;

    /// Clock out `data`, discarding what comes back
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Clock in `buf.len()` bytes while sending zeros
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<B: SpiBus + ?Sized> SpiBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(buf)
    }
}
