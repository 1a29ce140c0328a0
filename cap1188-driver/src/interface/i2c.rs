//! I2C register interface

use cap1188_hal::I2cBus;
use cap1188_protocol::I2cAddress;

use super::{RegisterInterface, TransportMode};

/// CAP1188 on an I2C (SMBus) bus
///
/// Register reads are a write of the register address followed by a
/// repeated-start read of one byte. Writes send the address and value in
/// one transaction.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create an interface for the device at a strap-selected address
    pub fn new(i2c: I2C, address: I2cAddress) -> Self {
        Self {
            i2c,
            address: address.addr(),
        }
    }

    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2cBus> RegisterInterface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn transport_mode(&self) -> TransportMode {
        TransportMode::I2c
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }
}
