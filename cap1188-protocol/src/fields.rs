//! Codecs for CAP1188 registers that pack several settings into one byte
//!
//! Encoding shifts each field into place and ORs them together, most
//! significant field first. Decoding masks each field back out. Every field
//! enum covers all values of its bit width, so decoding never fails and
//! `from_byte(to_byte(x)) == x` holds for every configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors from building a register value out of caller-supplied settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// Simultaneous touch limit outside 1..=4
    InvalidTouchCount(u8),
}

/// Whether repeated samples are averaged or accumulated (1 bit)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Averaging {
    #[default]
    Average = 0,
    Sum = 1,
}

impl Averaging {
    const MASK: u8 = 0x01;

    /// Decode from the low bit of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        match bits & Self::MASK {
            0 => Averaging::Average,
            _ => Averaging::Sum,
        }
    }

    /// Raw field value
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Samples taken per measurement (3 bits)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleCount {
    X1 = 0,
    X2 = 1,
    X4 = 2,
    #[default]
    X8 = 3,
    X16 = 4,
    X32 = 5,
    X64 = 6,
    X128 = 7,
}

impl SampleCount {
    const MASK: u8 = 0x07;

    /// Decode from the low three bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        match bits & Self::MASK {
            0 => SampleCount::X1,
            1 => SampleCount::X2,
            2 => SampleCount::X4,
            3 => SampleCount::X8,
            4 => SampleCount::X16,
            5 => SampleCount::X32,
            6 => SampleCount::X64,
            _ => SampleCount::X128,
        }
    }

    /// Raw field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Number of samples
    pub const fn samples(self) -> u8 {
        1 << (self as u8)
    }
}

/// Time spent on a single sample (2 bits)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleTime {
    Us320 = 0,
    Us640 = 1,
    #[default]
    Ms1_28 = 2,
    Ms2_56 = 3,
}

impl SampleTime {
    const MASK: u8 = 0x03;

    /// Decode from the low two bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        match bits & Self::MASK {
            0 => SampleTime::Us320,
            1 => SampleTime::Us640,
            2 => SampleTime::Ms1_28,
            _ => SampleTime::Ms2_56,
        }
    }

    /// Raw field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Sample time in microseconds
    pub const fn micros(self) -> u16 {
        320 << (self as u8)
    }
}

/// Overall cycle time for all measured inputs (2 bits)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CycleTime {
    Ms35 = 0,
    #[default]
    Ms70 = 1,
    Ms105 = 2,
    Ms140 = 3,
}

impl CycleTime {
    const MASK: u8 = 0x03;

    /// Decode from the low two bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        match bits & Self::MASK {
            0 => CycleTime::Ms35,
            1 => CycleTime::Ms70,
            2 => CycleTime::Ms105,
            _ => CycleTime::Ms140,
        }
    }

    /// Raw field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Cycle time in milliseconds
    pub const fn millis(self) -> u8 {
        35 * (self as u8 + 1)
    }
}

const AVERAGING_SHIFT: u8 = 7;
const SAMPLES_SHIFT: u8 = 4;
const SAMPLE_TIME_SHIFT: u8 = 2;

/// Standby Configuration register (0x41)
///
/// Bit layout: `AVG_SUM[7] | STBY_AVG[6:4] | STBY_SAMP_TIME[3:2] | STBY_CY_TIME[1:0]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandbyConfig {
    /// Average or accumulate samples of standby inputs
    pub averaging: Averaging,
    /// Samples per measurement
    pub samples: SampleCount,
    /// Time per sample
    pub sample_time: SampleTime,
    /// Standby cycle time
    pub cycle_time: CycleTime,
}

impl StandbyConfig {
    /// Encode into the register byte
    pub const fn to_byte(&self) -> u8 {
        self.averaging.bits() << AVERAGING_SHIFT
            | self.samples.bits() << SAMPLES_SHIFT
            | self.sample_time.bits() << SAMPLE_TIME_SHIFT
            | self.cycle_time.bits()
    }

    /// Decode from the register byte
    pub const fn from_byte(value: u8) -> Self {
        Self {
            averaging: Averaging::from_bits(value >> AVERAGING_SHIFT),
            samples: SampleCount::from_bits(value >> SAMPLES_SHIFT),
            sample_time: SampleTime::from_bits(value >> SAMPLE_TIME_SHIFT),
            cycle_time: CycleTime::from_bits(value),
        }
    }
}

/// Averaging and Sampling Configuration register (0x24), active mode
///
/// Bit layout: `reserved[7] | AVG[6:4] | SAMP_TIME[3:2] | CYCLE_TIME[1:0]`.
/// The reserved bit is written as zero and ignored when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingConfig {
    /// Samples per measurement
    pub samples: SampleCount,
    /// Time per sample
    pub sample_time: SampleTime,
    /// Active cycle time
    pub cycle_time: CycleTime,
}

impl SamplingConfig {
    /// Encode into the register byte
    pub const fn to_byte(&self) -> u8 {
        self.samples.bits() << SAMPLES_SHIFT
            | self.sample_time.bits() << SAMPLE_TIME_SHIFT
            | self.cycle_time.bits()
    }

    /// Decode from the register byte
    pub const fn from_byte(value: u8) -> Self {
        Self {
            samples: SampleCount::from_bits(value >> SAMPLES_SHIFT),
            sample_time: SampleTime::from_bits(value >> SAMPLE_TIME_SHIFT),
            cycle_time: CycleTime::from_bits(value),
        }
    }
}

/// Multiple Touch Configuration register (0x2A)
///
/// Either disabled (`0x00`) or enabled with a limit of 1 to 4 simultaneous
/// touches. The enabled settings map onto four preset bytes:
///
/// | limit | byte   |
/// |-------|--------|
/// | 1     | `0x80` |
/// | 2     | `0x84` |
/// | 3     | `0x88` |
/// | 4     | `0x8C` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct MultiTouchConfig {
    limit: Option<u8>,
}

impl MultiTouchConfig {
    /// MULT_BLK_EN
    const ENABLE: u8 = 1 << 7;
    const LIMIT_SHIFT: u8 = 2;
    const LIMIT_MASK: u8 = 0x03;

    /// Largest accepted simultaneous touch limit
    pub const MAX_TOUCHES: u8 = 4;

    /// Multiple touch blocking off
    pub const fn disabled() -> Self {
        Self { limit: None }
    }

    /// Block once more than `touches` inputs are touched at once
    pub const fn enabled(touches: u8) -> Result<Self, FieldError> {
        if touches == 0 || touches > Self::MAX_TOUCHES {
            return Err(FieldError::InvalidTouchCount(touches));
        }
        Ok(Self {
            limit: Some(touches),
        })
    }

    /// Build from the enable flag and count passed to the driver
    ///
    /// The count is ignored when `enable` is false.
    pub const fn new(enable: bool, touches: u8) -> Result<Self, FieldError> {
        if enable {
            Self::enabled(touches)
        } else {
            Ok(Self::disabled())
        }
    }

    /// Simultaneous touch limit, `None` when disabled
    pub const fn limit(&self) -> Option<u8> {
        self.limit
    }

    /// Check if multiple touch blocking is on
    pub const fn is_enabled(&self) -> bool {
        self.limit.is_some()
    }

    /// Encode into the register byte
    pub const fn to_byte(&self) -> u8 {
        match self.limit {
            None => 0,
            Some(touches) => Self::ENABLE | ((touches - 1) & Self::LIMIT_MASK) << Self::LIMIT_SHIFT,
        }
    }

    /// Decode from the register byte
    pub const fn from_byte(value: u8) -> Self {
        if value & Self::ENABLE == 0 {
            return Self::disabled();
        }
        Self {
            limit: Some(((value >> Self::LIMIT_SHIFT) & Self::LIMIT_MASK) + 1),
        }
    }
}

impl From<u8> for MultiTouchConfig {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<MultiTouchConfig> for u8 {
    fn from(config: MultiTouchConfig) -> Self {
        config.to_byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_register_defaults_match_power_on_values() {
        // Both sampling registers reset to 0x39
        assert_eq!(StandbyConfig::default().to_byte(), 0x39);
        assert_eq!(SamplingConfig::default().to_byte(), 0x39);
        assert_eq!(MultiTouchConfig::default().to_byte(), 0x00);
    }

    #[test]
    fn test_standby_encoding() {
        let config = StandbyConfig {
            averaging: Averaging::Sum,
            samples: SampleCount::X128,
            sample_time: SampleTime::Us640,
            cycle_time: CycleTime::Ms140,
        };
        assert_eq!(config.to_byte(), 0b1111_0111);

        let config = StandbyConfig {
            averaging: Averaging::Average,
            samples: SampleCount::X2,
            sample_time: SampleTime::Ms2_56,
            cycle_time: CycleTime::Ms35,
        };
        assert_eq!(config.to_byte(), 0b0001_1100);
    }

    #[test]
    fn test_sampling_ignores_reserved_bit() {
        let config = SamplingConfig::from_byte(0xB9);
        assert_eq!(config, SamplingConfig::default());
        assert_eq!(config.to_byte(), 0x39);
    }

    #[test]
    fn test_multi_touch_presets() {
        let bytes: [u8; 4] = [0x80, 0x84, 0x88, 0x8C];
        for (touches, expected) in (1..=4).zip(bytes) {
            let config = MultiTouchConfig::enabled(touches).unwrap();
            assert_eq!(config.to_byte(), expected);
            assert_eq!(config.limit(), Some(touches));
        }
    }

    #[test]
    fn test_multi_touch_rejects_bad_counts() {
        assert_eq!(
            MultiTouchConfig::enabled(0),
            Err(FieldError::InvalidTouchCount(0))
        );
        assert_eq!(
            MultiTouchConfig::enabled(5),
            Err(FieldError::InvalidTouchCount(5))
        );
        // Count does not matter while disabled
        assert_eq!(
            MultiTouchConfig::new(false, 9),
            Ok(MultiTouchConfig::disabled())
        );
    }

    #[test]
    fn test_multi_touch_decode() {
        assert!(!MultiTouchConfig::from_byte(0x00).is_enabled());
        assert!(!MultiTouchConfig::from_byte(0x0C).is_enabled());
        assert_eq!(MultiTouchConfig::from_byte(0x88).limit(), Some(3));
    }

    #[test]
    fn test_field_helpers() {
        assert_eq!(SampleCount::X1.samples(), 1);
        assert_eq!(SampleCount::X128.samples(), 128);
        assert_eq!(SampleTime::Us320.micros(), 320);
        assert_eq!(SampleTime::Ms2_56.micros(), 2560);
        assert_eq!(CycleTime::Ms35.millis(), 35);
        assert_eq!(CycleTime::Ms140.millis(), 140);
    }

    proptest! {
        #[test]
        fn prop_standby_round_trip(avg in 0u8..2, samples in 0u8..8, time in 0u8..4, cycle in 0u8..4) {
            let config = StandbyConfig {
                averaging: Averaging::from_bits(avg),
                samples: SampleCount::from_bits(samples),
                sample_time: SampleTime::from_bits(time),
                cycle_time: CycleTime::from_bits(cycle),
            };
            prop_assert_eq!(StandbyConfig::from_byte(config.to_byte()), config);
        }

        #[test]
        fn prop_standby_covers_whole_byte(value in any::<u8>()) {
            prop_assert_eq!(StandbyConfig::from_byte(value).to_byte(), value);
        }

        #[test]
        fn prop_sampling_round_trip(samples in 0u8..8, time in 0u8..4, cycle in 0u8..4) {
            let config = SamplingConfig {
                samples: SampleCount::from_bits(samples),
                sample_time: SampleTime::from_bits(time),
                cycle_time: CycleTime::from_bits(cycle),
            };
            prop_assert_eq!(SamplingConfig::from_byte(config.to_byte()), config);
        }

        #[test]
        fn prop_multi_touch_round_trip(enable in any::<bool>(), touches in 1u8..=4) {
            let config = MultiTouchConfig::new(enable, touches).unwrap();
            prop_assert_eq!(MultiTouchConfig::from_byte(config.to_byte()), config);
        }
    }
}
