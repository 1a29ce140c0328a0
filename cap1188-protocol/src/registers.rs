//! Register definitions for the CAP1188

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Expected content of [`Register::ProductId`]
pub const PRODUCT_ID: u8 = 0x50;

/// Expected content of [`Register::ManufacturerId`] (Microchip/SMSC)
pub const MANUFACTURER_ID: u8 = 0x5D;

/// CAP1188 register addresses
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Power state, gain and the INT flag (B0)
    MainControl = 0x00,
    /// Summary status bits
    GeneralStatus = 0x02,
    /// One bit per touched sensor input
    SensorInputStatus = 0x03,
    /// Delta sensitivity and base shift
    SensitivityControl = 0x1F,
    /// General configuration
    Configuration = 0x20,
    /// Per-input enable while active
    SensorInputEnable = 0x21,
    /// Active-mode averaging and sampling
    AveragingSamplingConfig = 0x24,
    /// Multiple touch blocking
    MultipleTouchConfig = 0x2A,
    /// Recalibration options, B7 is BUT_LD_TH
    RecalibrationConfig = 0x2F,
    SensorInput1Threshold = 0x30,
    SensorInput2Threshold = 0x31,
    SensorInput3Threshold = 0x32,
    SensorInput4Threshold = 0x33,
    SensorInput5Threshold = 0x34,
    SensorInput6Threshold = 0x35,
    SensorInput7Threshold = 0x36,
    SensorInput8Threshold = 0x37,
    /// Standby-mode averaging and sampling
    StandbyConfig = 0x41,
    /// Sensor input to LED output linking
    SensorInputLedLinking = 0x72,
    ProductId = 0xFD,
    ManufacturerId = 0xFE,
    Revision = 0xFF,
}

impl Register {
    /// Raw register address
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}

/// Recalibration Configuration bits
pub mod recalibration {
    /// BUT_LD_TH: writes to input 1 threshold are copied to all inputs
    pub const BUT_LD_TH: u8 = 1 << 7;

    /// Return `value` with the threshold broadcast bit set or cleared
    pub const fn with_broadcast(value: u8, enabled: bool) -> u8 {
        if enabled {
            value | BUT_LD_TH
        } else {
            value & !BUT_LD_TH
        }
    }
}

/// Main Control bits
pub mod main_control {
    /// INT: interrupt asserted
    pub const INT: u8 = 1 << 0;

    /// Return `value` with the interrupt flag cleared, all other bits kept
    pub const fn clear_interrupt(value: u8) -> u8 {
        value & !INT
    }
}

/// I2C slave address, selected by the resistor on the ADDR_COMM pin
///
/// A pull-down to ground without a resistor value from this list selects
/// one of the SPI modes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum I2cAddress {
    /// ADDR_COMM tied to VDD
    Vdd,
    /// 150k to ground (most breakout boards)
    #[default]
    Pulldown150k,
    /// 120k to ground
    Pulldown120k,
    /// 100k to ground
    Pulldown100k,
    /// 82k to ground
    Pulldown82k,
}

impl I2cAddress {
    /// 7-bit bus address
    pub const fn addr(self) -> u8 {
        match self {
            I2cAddress::Vdd => 0x28,
            I2cAddress::Pulldown150k => 0x29,
            I2cAddress::Pulldown120k => 0x2A,
            I2cAddress::Pulldown100k => 0x2B,
            I2cAddress::Pulldown82k => 0x2C,
        }
    }

    /// Look up the strap option for a 7-bit address
    pub const fn from_addr(addr: u8) -> Option<Self> {
        match addr {
            0x28 => Some(I2cAddress::Vdd),
            0x29 => Some(I2cAddress::Pulldown150k),
            0x2A => Some(I2cAddress::Pulldown120k),
            0x2B => Some(I2cAddress::Pulldown100k),
            0x2C => Some(I2cAddress::Pulldown82k),
            _ => None,
        }
    }
}
