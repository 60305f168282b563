//! `embedded-hal` pin adapters for the line-level ports.
//!
//! Any HAL whose pins implement [`OutputPin`] / [`InputPin`] (ESP-IDF
//! `PinDriver`, AVR, RP2040, test doubles) plugs in here.  Pin errors
//! are logged and dropped: the domain treats register I/O as infallible.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::warn;

use crate::app::ports::{DigitalInput, DigitalOutputGroup};
use crate::error::GpioError;

/// `N` output pins driven as one group, line i = `lines[i]`.
pub struct OutputGroup<P, const N: usize> {
    name: &'static str,
    lines: [P; N],
}

impl<P: OutputPin, const N: usize> OutputGroup<P, N> {
    pub fn new(name: &'static str, lines: [P; N]) -> Self {
        Self { name, lines }
    }

    /// Give the pins back.
    pub fn release(self) -> [P; N] {
        self.lines
    }
}

impl<P: OutputPin, const N: usize> DigitalOutputGroup for OutputGroup<P, N> {
    fn width(&self) -> usize {
        N
    }

    fn write_line(&mut self, index: usize, high: bool) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        if let Err(e) = line.set_state(PinState::from(high)) {
            warn!("{}: {} ({:?})", self.name, GpioError::WriteFailed(index), e);
        }
    }
}

/// A single input pin read as a raw level.
pub struct InputLine<P> {
    name: &'static str,
    pin: P,
}

impl<P: InputPin> InputLine<P> {
    pub fn new(name: &'static str, pin: P) -> Self {
        Self { name, pin }
    }
}

impl<P: InputPin> DigitalInput for InputLine<P> {
    /// A failed read reports high, which an active-low button treats as released.
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(e) => {
                warn!("{}: {} ({:?})", self.name, GpioError::ReadFailed, e);
                true
            }
        }
    }
}
