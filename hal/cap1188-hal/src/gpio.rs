//! GPIO pin abstractions
//!
//! The driver only ever drives pins, so only an output trait is defined.

/// Digital output pin
///
/// Used for the CAP1188 RESET line and, in SPI mode, the active-low
/// chip-select line. Pin writes are treated as infallible.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }
}
