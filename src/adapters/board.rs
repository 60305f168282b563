//! Board adapter: bridges raw output groups and inputs to domain ports.
//!
//! Owns both LED groups, the split 7-segment outputs (`a`–`f` on one
//! six-line group, `g` on its own line), both buttons and a blocking
//! delay, exposing them through [`IndicatorPort`], [`ButtonPort`] and
//! [`DelayPort`].  This is the only module that maps domain concepts
//! onto physical lines.

use embedded_hal::delay::DelayNs;

use crate::app::counter::{ALL_LEDS, CounterId};
use crate::app::ports::{
    ButtonPort, DelayPort, DigitalInput, DigitalOutputGroup, IndicatorPort,
};
use crate::display::segment::SegmentPattern;

/// Concrete adapter that combines all board I/O behind port traits.
pub struct Board<L, S, G, B, D> {
    leds: [L; 2],
    segments: S,
    segment_g: G,
    buttons: [B; 2],
    delay: D,
}

impl<L, S, G, B, D> Board<L, S, G, B, D>
where
    L: DigitalOutputGroup,
    S: DigitalOutputGroup,
    G: DigitalOutputGroup,
    B: DigitalInput,
    D: DelayNs,
{
    /// `leds` and `buttons` are indexed by [`CounterId::index`].
    pub fn new(leds: [L; 2], segments: S, segment_g: G, buttons: [B; 2], delay: D) -> Self {
        debug_assert!(segments.width() >= 6, "segment group needs lines a-f");
        debug_assert!(segment_g.width() >= 1, "segment g needs a line");
        Self {
            leds,
            segments,
            segment_g,
            buttons,
            delay,
        }
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<L, S, G, B, D> IndicatorPort for Board<L, S, G, B, D>
where
    L: DigitalOutputGroup,
    S: DigitalOutputGroup,
    G: DigitalOutputGroup,
{
    fn show_leds(&mut self, counter: CounterId, bits: u8) {
        self.leds[counter.index()].write_bits(bits & ALL_LEDS);
    }

    fn show_segments(&mut self, pattern: SegmentPattern) {
        self.segments.write_bits(pattern.low_group());
        self.segment_g.write_line(0, pattern.g_line());
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl<L, S, G, B, D> ButtonPort for Board<L, S, G, B, D>
where
    B: DigitalInput,
{
    fn read_raw(&mut self, button: CounterId) -> bool {
        self.buttons[button.index()].is_high()
    }
}

// ── DelayPort implementation ──────────────────────────────────

impl<L, S, G, B, D> DelayPort for Board<L, S, G, B, D>
where
    D: DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
