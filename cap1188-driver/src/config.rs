//! Start-up configuration
//!
//! [`DeviceConfig`] collects the register settings applied by
//! [`Cap1188::init_with`](crate::Cap1188::init_with). The default matches
//! [`Cap1188::init`](crate::Cap1188::init): multiple touch blocking off and
//! every sensor input linked to its LED.

use cap1188_protocol::{MultiTouchConfig, SamplingConfig, StandbyConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum time the reset line is held high
pub const RESET_PULSE_MS: u32 = 10;

/// LED linking mask with all eight inputs linked
pub const LINK_ALL_INPUTS: u8 = 0xFF;

/// Register settings applied after reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// Multiple touch blocking
    pub multi_touch: MultiTouchConfig,
    /// Sensor input to LED linking mask
    pub led_linking: u8,
    /// Reset pulse length in ms (clamped to at least [`RESET_PULSE_MS`])
    pub reset_pulse_ms: u32,
    /// Standby sampling, left at the power-on value when `None`
    pub standby: Option<StandbyConfig>,
    /// Active sampling, left at the power-on value when `None`
    pub sampling: Option<SamplingConfig>,
    /// Touch threshold for all inputs, left at the power-on value when `None`
    pub threshold: Option<u8>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            multi_touch: MultiTouchConfig::disabled(),
            led_linking: LINK_ALL_INPUTS,
            reset_pulse_ms: RESET_PULSE_MS,
            standby: None,
            sampling: None,
            threshold: None,
        }
    }
}

impl DeviceConfig {
    /// Set multiple touch blocking
    pub fn with_multi_touch(mut self, multi_touch: MultiTouchConfig) -> Self {
        self.multi_touch = multi_touch;
        self
    }

    /// Set the LED linking mask
    pub fn with_led_linking(mut self, mask: u8) -> Self {
        self.led_linking = mask;
        self
    }

    /// Set the standby sampling configuration
    pub fn with_standby(mut self, standby: StandbyConfig) -> Self {
        self.standby = Some(standby);
        self
    }

    /// Set the active sampling configuration
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = Some(sampling);
        self
    }

    /// Set one touch threshold for all inputs
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Reset pulse length actually used
    pub fn reset_pulse(&self) -> u32 {
        self.reset_pulse_ms.max(RESET_PULSE_MS)
    }
}
