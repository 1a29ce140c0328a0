//! CAP1188 capacitive touch controller driver
//!
//! Talks to the Microchip CAP1188 (8 sensor inputs, 8 LED outputs) over
//! either of its two host interfaces:
//!
//! - I2C/SMBus at one of five strap-selected addresses
//! - 4-wire SPI with chip select and command framing
//!
//! The transport is chosen by the constructor and fixed for the lifetime
//! of the driver:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Cap1188<IFACE, RST>                         │
//! │  init, poll, thresholds, sampling, LEDs      │
//! └──────────────────────────────────────────────┘
//!                       │ RegisterInterface
//!           ┌───────────┴───────────┐
//!           ▼                       ▼
//! ┌───────────────────┐   ┌───────────────────┐
//! │  I2cInterface     │   │  SpiInterface     │
//! │  I2cBus           │   │  SpiBus + CS pin  │
//! └───────────────────┘   └───────────────────┘
//! ```
//!
//! Bus, pin and delay services come from `cap1188-hal`; register
//! addresses and field codecs from `cap1188-protocol`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod device;
pub mod error;
pub mod interface;

#[cfg(test)]
mod sim;

pub use config::{DeviceConfig, LINK_ALL_INPUTS, RESET_PULSE_MS};
pub use device::{Cap1188, DeviceId};
pub use error::Error;
pub use interface::{I2cInterface, RegisterInterface, SpiInterface, TransportMode};

pub use cap1188_hal as hal;
pub use cap1188_protocol as protocol;
