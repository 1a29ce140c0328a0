//! Driver error type

use cap1188_protocol::FieldError;

/// CAP1188 driver errors
///
/// `E` is the error type of the register interface in use. Precondition
/// errors are reported before any register is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transaction failed
    Interface(E),
    /// Sensor input number outside 1..=8
    InvalidSensorInput(u8),
    /// Simultaneous touch limit outside 1..=4
    InvalidTouchCount(u8),
    /// Identification registers do not match a CAP1188
    UnexpectedDevice {
        /// Content of the product ID register
        product_id: u8,
        /// Content of the manufacturer ID register
        manufacturer_id: u8,
    },
}

impl<E> From<FieldError> for Error<E> {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::InvalidTouchCount(count) => Error::InvalidTouchCount(count),
        }
    }
}
