//! Port traits: the hexagonal boundary between domain logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Two layers live here.  The line-level traits ([`DigitalOutputGroup`],
//! [`DigitalInput`]) model raw GPIO.  The domain-level traits
//! ([`IndicatorPort`], [`ButtonPort`], [`DelayPort`], [`ClockPort`],
//! [`EventSink`]) are what the [`AppService`](super::service::AppService)
//! consumes via generics, so the domain core never touches hardware.
//!
//! Ports are infallible: register writes on the board cannot fail, and
//! adapters built on fallible `embedded-hal` pins log and swallow errors.

use crate::display::segment::SegmentPattern;

use super::counter::CounterId;
use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Line-level ports
// ───────────────────────────────────────────────────────────────

/// A fixed set of output lines driven together (LED bar, segment group).
pub trait DigitalOutputGroup {
    /// Number of lines in the group.
    fn width(&self) -> usize;

    /// Drive line `index` high or low.  Indices past `width()` are ignored.
    fn write_line(&mut self, index: usize, high: bool);

    /// Drive every line from `bits`, LSB-first: bit i drives line i.
    fn write_bits(&mut self, bits: u8) {
        for i in 0..self.width().min(8) {
            self.write_line(i, (bits >> i) & 1 == 1);
        }
    }

    /// Drive every line low.
    fn clear(&mut self) {
        self.write_bits(0);
    }
}

/// A single raw digital input.
pub trait DigitalInput {
    /// Current electrical level (`true` = high).
    fn is_high(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (domain → LEDs and 7-segment display)
// ───────────────────────────────────────────────────────────────

pub trait IndicatorPort {
    /// Show the low four bits of `bits` on the counter's LED group.
    fn show_leds(&mut self, counter: CounterId, bits: u8);

    /// Drive all seven display segments from `pattern`.
    fn show_segments(&mut self, pattern: SegmentPattern);

    /// Blank the display.
    fn clear_display(&mut self) {
        self.show_segments(SegmentPattern::BLANK);
    }
}

// ───────────────────────────────────────────────────────────────
// Button port (hardware → domain)
// ───────────────────────────────────────────────────────────────

pub trait ButtonPort {
    /// Raw level of the counter's button pin.  Buttons are active-low with
    /// pull-ups, so `true` means released.
    fn read_raw(&mut self, button: CounterId) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Timing ports
// ───────────────────────────────────────────────────────────────

/// Blocking delay.  Always runs to completion.
pub trait DelayPort {
    fn delay_ms(&mut self, ms: u32);
}

/// Monotonic millisecond clock, wrapping at `u32::MAX`.
pub trait ClockPort {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
