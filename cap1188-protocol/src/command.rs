//! SPI command framing for the CAP1188 4-wire ("normal") protocol
//!
//! The SPI interface keeps an internal register pointer. Accessing a
//! register is therefore two chip-select frames: one to move the pointer,
//! one to read or write at it.

/// SPI command bytes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Sent twice to resynchronise the SPI state machine
    ResetInterface = 0x7A,
    /// Followed by the register address
    SetAddress = 0x7D,
    /// Followed by the data byte
    Write = 0x7E,
    /// Device answers with the register content
    Read = 0x7F,
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> Self {
        cmd as u8
    }
}

/// Frame that resets the SPI interface
pub const RESET_INTERFACE_FRAME: [u8; 2] = [
    Command::ResetInterface as u8,
    Command::ResetInterface as u8,
];

/// Build a frame that moves the register pointer to `register`
pub fn set_address_frame(register: u8) -> [u8; 2] {
    [Command::SetAddress as u8, register]
}

/// Build a frame that writes `value` at the register pointer
pub fn write_frame(value: u8) -> [u8; 2] {
    [Command::Write as u8, value]
}

/// Build the request half of a read frame
pub fn read_frame() -> [u8; 1] {
    [Command::Read as u8]
}
