//! CAP1188 device facade
//!
//! [`Cap1188`] owns a [`RegisterInterface`] and the reset pin. Every method
//! performs fresh register transactions; nothing is cached. Methods take
//! `&mut self`, so multi-step sequences such as the interrupt
//! acknowledgment in [`Cap1188::poll_touched_inputs`] cannot be interleaved
//! with other accesses to the same device.

use cap1188_hal::{DelayMs, OutputPin};
use cap1188_protocol::registers::{main_control, recalibration};
use cap1188_protocol::{
    I2cAddress, MultiTouchConfig, Register, SamplingConfig, SensorInput, StandbyConfig,
    TouchMask, MANUFACTURER_ID, PRODUCT_ID,
};

use crate::config::DeviceConfig;
use crate::error::Error;
use crate::interface::{I2cInterface, RegisterInterface, SpiInterface, TransportMode};

/// Identification registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    /// Product ID (0x50 for the CAP1188)
    pub product_id: u8,
    /// Manufacturer ID (0x5D)
    pub manufacturer_id: u8,
    /// Silicon revision
    pub revision: u8,
}

/// Driver for the CAP1188 capacitive touch controller
pub struct Cap1188<IFACE, RST> {
    iface: IFACE,
    reset: RST,
}

impl<I2C, RST> Cap1188<I2cInterface<I2C>, RST> {
    /// Create a driver for a device on an I2C bus
    pub fn new_i2c(i2c: I2C, address: I2cAddress, reset: RST) -> Self {
        Self::new(I2cInterface::new(i2c, address), reset)
    }
}

impl<SPI, CS, RST> Cap1188<SpiInterface<SPI, CS>, RST> {
    /// Create a driver for a device on an SPI bus
    pub fn new_spi(spi: SPI, cs: CS, reset: RST) -> Self {
        Self::new(SpiInterface::new(spi, cs), reset)
    }
}

impl<IFACE, RST> Cap1188<IFACE, RST> {
    /// Create a driver from any register interface
    pub fn new(iface: IFACE, reset: RST) -> Self {
        Self { iface, reset }
    }

    /// Access the register interface
    pub fn interface(&mut self) -> &mut IFACE {
        &mut self.iface
    }

    /// Release the interface and reset pin
    pub fn release(self) -> (IFACE, RST) {
        (self.iface, self.reset)
    }
}

impl<IFACE, RST> Cap1188<IFACE, RST>
where
    IFACE: RegisterInterface,
    RST: OutputPin,
{
    /// Transport fixed at construction
    pub fn transport_mode(&self) -> TransportMode {
        self.iface.transport_mode()
    }

    /// Reset the device and apply the default configuration
    ///
    /// Pulses RESET, resynchronises the SPI interface when in SPI mode,
    /// turns multiple touch blocking off and links every input to its LED.
    pub fn init<D: DelayMs>(&mut self, delay: &mut D) -> Result<(), Error<IFACE::Error>> {
        self.init_with(&DeviceConfig::default(), delay)
    }

    /// Reset the device and apply `config`
    pub fn init_with<D: DelayMs>(
        &mut self,
        config: &DeviceConfig,
        delay: &mut D,
    ) -> Result<(), Error<IFACE::Error>> {
        self.hard_reset(config.reset_pulse(), delay);
        self.iface.reset_interface().map_err(Error::Interface)?;

        self.set_multi_touch_config(config.multi_touch)?;
        self.link_inputs_to_leds(config.led_linking)?;

        if let Some(standby) = config.standby {
            self.set_standby_config(standby)?;
        }
        if let Some(sampling) = config.sampling {
            self.set_sampling_config(sampling)?;
        }
        if let Some(threshold) = config.threshold {
            self.set_threshold_all(threshold)?;
        }
        Ok(())
    }

    /// Drive RESET high for `pulse_ms`, then release it
    pub fn hard_reset<D: DelayMs>(&mut self, pulse_ms: u32, delay: &mut D) {
        #[cfg(feature = "defmt")]
        defmt::debug!("CAP1188 reset pulse {=u32} ms", pulse_ms);

        self.reset.set_high();
        delay.delay_ms(pulse_ms);
        self.reset.set_low();
    }

    /// Read the product ID, manufacturer ID and revision
    pub fn identify(&mut self) -> Result<DeviceId, Error<IFACE::Error>> {
        Ok(DeviceId {
            product_id: self.read(Register::ProductId)?,
            manufacturer_id: self.read(Register::ManufacturerId)?,
            revision: self.read(Register::Revision)?,
        })
    }

    /// Identify the device and check that it is a CAP1188
    pub fn probe(&mut self) -> Result<DeviceId, Error<IFACE::Error>> {
        let id = self.identify()?;
        if id.product_id != PRODUCT_ID || id.manufacturer_id != MANUFACTURER_ID {
            return Err(Error::UnexpectedDevice {
                product_id: id.product_id,
                manufacturer_id: id.manufacturer_id,
            });
        }
        Ok(id)
    }

    /// Configure multiple touch blocking
    ///
    /// With `enable` set, `touches` must be in 1..=4; otherwise
    /// [`Error::InvalidTouchCount`] is returned and the register is left
    /// alone. `touches` is ignored when `enable` is false.
    pub fn configure_multi_touch(
        &mut self,
        enable: bool,
        touches: u8,
    ) -> Result<(), Error<IFACE::Error>> {
        let config = MultiTouchConfig::new(enable, touches)?;
        self.set_multi_touch_config(config)
    }

    /// Write a multiple touch configuration
    pub fn set_multi_touch_config(
        &mut self,
        config: MultiTouchConfig,
    ) -> Result<(), Error<IFACE::Error>> {
        self.write(Register::MultipleTouchConfig, config.to_byte())
    }

    /// Read the multiple touch configuration
    pub fn multi_touch_config(&mut self) -> Result<MultiTouchConfig, Error<IFACE::Error>> {
        self.read(Register::MultipleTouchConfig)
            .map(MultiTouchConfig::from_byte)
    }

    /// Link sensor inputs to LED outputs
    ///
    /// Bit `i` of `mask` links input `i + 1` to LED `i + 1`.
    pub fn link_inputs_to_leds(&mut self, mask: u8) -> Result<(), Error<IFACE::Error>> {
        self.write(Register::SensorInputLedLinking, mask)
    }

    /// Read the LED linking mask
    pub fn led_linking(&mut self) -> Result<u8, Error<IFACE::Error>> {
        self.read(Register::SensorInputLedLinking)
    }

    /// Read which inputs are touched and acknowledge the interrupt
    ///
    /// When any input is touched the INT bit in Main Control is cleared
    /// straight after the status read, which releases the ALERT pin. An
    /// empty mask causes no further access.
    pub fn poll_touched_inputs(&mut self) -> Result<TouchMask, Error<IFACE::Error>> {
        let mask = TouchMask(self.read(Register::SensorInputStatus)?);
        if !mask.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::debug!("CAP1188 touched inputs {=u8:#x}", mask.bits());

            self.clear_interrupt()?;
        }
        Ok(mask)
    }

    /// Clear the INT bit in Main Control, keeping all other bits
    pub fn clear_interrupt(&mut self) -> Result<(), Error<IFACE::Error>> {
        let control = self.read(Register::MainControl)?;
        self.write(Register::MainControl, main_control::clear_interrupt(control))?;

        #[cfg(feature = "defmt")]
        defmt::trace!("CAP1188 interrupt cleared");

        Ok(())
    }

    /// Write the standby sampling configuration
    pub fn set_standby_config(&mut self, config: StandbyConfig) -> Result<(), Error<IFACE::Error>> {
        self.write(Register::StandbyConfig, config.to_byte())
    }

    /// Read the standby sampling configuration
    pub fn standby_config(&mut self) -> Result<StandbyConfig, Error<IFACE::Error>> {
        self.read(Register::StandbyConfig)
            .map(StandbyConfig::from_byte)
    }

    /// Write the active-mode sampling configuration
    pub fn set_sampling_config(
        &mut self,
        config: SamplingConfig,
    ) -> Result<(), Error<IFACE::Error>> {
        self.write(Register::AveragingSamplingConfig, config.to_byte())
    }

    /// Read the active-mode sampling configuration
    pub fn sampling_config(&mut self) -> Result<SamplingConfig, Error<IFACE::Error>> {
        self.read(Register::AveragingSamplingConfig)
            .map(SamplingConfig::from_byte)
    }

    /// Set the touch threshold of input `input` (1..=8)
    ///
    /// Always a single register write. While BUT_LD_TH is set in
    /// Recalibration Configuration (its power-on state), the device copies
    /// an input 1 threshold to inputs 2-8 as well. Clear that bit first,
    /// or write input 1 before the others, to keep per-input values.
    ///
    /// An out-of-range input returns [`Error::InvalidSensorInput`] without
    /// any bus access.
    pub fn set_threshold(&mut self, input: u8, value: u8) -> Result<(), Error<IFACE::Error>> {
        let input = SensorInput::new(input).ok_or(Error::InvalidSensorInput(input))?;
        self.write(input.threshold_register(), value)
    }

    /// Read the touch threshold of input `input` (1..=8)
    ///
    /// An out-of-range input reads as 0 without any bus access.
    pub fn threshold(&mut self, input: u8) -> Result<u8, Error<IFACE::Error>> {
        match SensorInput::new(input) {
            Some(input) => self.read(input.threshold_register()),
            None => Ok(0),
        }
    }

    /// Set the same touch threshold on all eight inputs
    ///
    /// Arms BUT_LD_TH in Recalibration Configuration, writes the input 1
    /// threshold (which the device copies to inputs 2-8), then writes the
    /// original Recalibration Configuration back. Always exactly three
    /// writes, in that order.
    pub fn set_threshold_all(&mut self, value: u8) -> Result<(), Error<IFACE::Error>> {
        let recal = self.read(Register::RecalibrationConfig)?;

        self.write(
            Register::RecalibrationConfig,
            recalibration::with_broadcast(recal, true),
        )?;
        self.write(Register::SensorInput1Threshold, value)?;
        self.write(Register::RecalibrationConfig, recal)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("CAP1188 threshold {=u8} on all inputs", value);

        Ok(())
    }

    /// Read an arbitrary register
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error<IFACE::Error>> {
        self.iface.read_register(register).map_err(Error::Interface)
    }

    /// Write an arbitrary register
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<IFACE::Error>> {
        self.iface
            .write_register(register, value)
            .map_err(Error::Interface)
    }

    fn read(&mut self, register: Register) -> Result<u8, Error<IFACE::Error>> {
        self.read_register(register.addr())
    }

    fn write(&mut self, register: Register, value: u8) -> Result<(), Error<IFACE::Error>> {
        self.write_register(register.addr(), value)
    }
}
