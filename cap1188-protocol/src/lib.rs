//! CAP1188 register-level protocol
//!
//! This crate describes the CAP1188 capacitive touch controller as data:
//! its register map, the command framing used by the 4-wire SPI interface,
//! and the codecs for registers that pack several settings into one byte.
//! It performs no I/O; the driver crate moves the bytes.
//!
//! # SPI framing
//!
//! Every SPI command is a short frame bracketed by chip select:
//! ```text
//! ┌──────────────┬────────────┐
//! │ COMMAND      │ OPERAND    │
//! │ 1B           │ 0–1B       │
//! └──────────────┴────────────┘
//!   0x7A 0x7A        reset interface
//!   0x7D <reg>       set register pointer
//!   0x7E <value>     write at pointer
//!   0x7F → <value>   read at pointer
//! ```
//!
//! # Packed registers
//!
//! ```text
//!   Standby Configuration (0x41)   │AVG│ SAMPLES │ TIME │ CYCLE │
//!   Averaging & Sampling  (0x24)   │ - │ SAMPLES │ TIME │ CYCLE │
//!                                   B7  B6..B4    B3..B2 B1..B0
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod fields;
pub mod input;
pub mod registers;

pub use command::{Command, RESET_INTERFACE_FRAME};
pub use fields::{
    Averaging, CycleTime, FieldError, MultiTouchConfig, SampleCount, SampleTime, SamplingConfig,
    StandbyConfig,
};
pub use input::{SensorInput, TouchMask, SENSOR_INPUT_COUNT};
pub use registers::{I2cAddress, Register, MANUFACTURER_ID, PRODUCT_ID};
