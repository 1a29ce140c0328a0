//! CAP1188 Hardware Abstraction Layer
//!
//! This crate defines the platform services the CAP1188 driver calls into:
//! raw byte transfer over I2C or SPI, a digital output for the reset and
//! chip-select lines, and a millisecond delay. Board support code
//! implements these traits directly, or wraps an `embedded-hal` 1.0
//! implementation in one of the adapters from [`eh`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  cap1188-driver (Cap1188 facade)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cap1188-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  eh adapters  │       │  board code   │
//! │ (embedded-hal)│       │  (direct impl)│
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (reset, chip select)
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`delay::DelayMs`] - Blocking delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod eh;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::SpiBus;
