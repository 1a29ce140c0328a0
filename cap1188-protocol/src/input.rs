//! Sensor inputs and the touch status mask

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registers::Register;

/// Number of capacitive sensor inputs (CS1..CS8)
pub const SENSOR_INPUT_COUNT: usize = 8;

/// Threshold register per sensor input, indexed by input number minus one
const THRESHOLD_REGISTERS: [Register; SENSOR_INPUT_COUNT] = [
    Register::SensorInput1Threshold,
    Register::SensorInput2Threshold,
    Register::SensorInput3Threshold,
    Register::SensorInput4Threshold,
    Register::SensorInput5Threshold,
    Register::SensorInput6Threshold,
    Register::SensorInput7Threshold,
    Register::SensorInput8Threshold,
];

/// A sensor input number, guaranteed to be in 1..=8
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct SensorInput(u8);

impl SensorInput {
    /// Validate an input number
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= SENSOR_INPUT_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Input number (1..=8)
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based bit position in status and linking masks
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Mask bit for this input
    pub const fn bit(self) -> u8 {
        1 << (self.0 - 1)
    }

    /// Delta threshold register of this input
    pub const fn threshold_register(self) -> Register {
        THRESHOLD_REGISTERS[self.index()]
    }

    /// All inputs in ascending order
    pub fn all() -> impl Iterator<Item = SensorInput> {
        (1..=SENSOR_INPUT_COUNT as u8).map(SensorInput)
    }
}

impl TryFrom<u8> for SensorInput {
    type Error = u8;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or(number)
    }
}

impl From<SensorInput> for u8 {
    fn from(input: SensorInput) -> Self {
        input.0
    }
}

/// Content of the Sensor Input Status register
///
/// Bit `i` set means input `i + 1` is currently touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchMask(pub u8);

impl TouchMask {
    /// No input touched
    pub const NONE: Self = Self(0);

    /// Raw register value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if no input is touched
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if `input` is touched
    pub const fn is_touched(self, input: SensorInput) -> bool {
        self.0 & input.bit() != 0
    }

    /// Number of touched inputs
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Touched inputs in ascending order
    pub fn touched(self) -> Vec<SensorInput, SENSOR_INPUT_COUNT> {
        SensorInput::all()
            .filter(|input| self.is_touched(*input))
            .collect()
    }
}

impl From<u8> for TouchMask {
    fn from(value: u8) -> Self {
        Self(value)
    }
}
