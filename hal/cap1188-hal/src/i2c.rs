//! I2C bus abstraction
//!
//! The CAP1188 speaks SMBus-compatible I2C at up to 400 kHz. A register
//! read is an address write followed by a repeated-start read, so
//! [`I2cBus::write_read`] must not release the bus between the two phases.

/// I2C bus master
pub trait I2cBus {
    /// Bus error (NACK, arbitration loss, ...)
    type Error;

    /// Send `data` to the device at 7-bit `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Send `write_data`, then read into `read_buf` after a repeated start
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}

impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        (**self).write_read(address, write_data, read_buf)
    }
}
