//! Startup countdown on the 7-segment display.
//!
//! Shows `start, start-1, ..., 0`, holding each digit for one step, then
//! blanks the display.  The whole sequence blocks: button input is not
//! sampled while it runs, so presses during the countdown are dropped.
//!
//! [`CountdownSequencer::run`] consumes the sequencer, so a countdown can
//! only ever run once.

use heapless::Vec;
use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::{DelayPort, EventSink, IndicatorPort};
use crate::config::SystemConfig;
use crate::error::DigitError;

use super::segment::{Digit, SegmentPattern};

/// Longest possible countdown: 9 down to 0.
pub const MAX_STEPS: usize = 10;

#[derive(Debug, Clone)]
pub struct CountdownSequencer {
    start: Digit,
    step_ms: u32,
}

impl CountdownSequencer {
    pub fn new(start: Digit, step_ms: u32) -> Self {
        Self { start, step_ms }
    }

    pub fn from_config(config: &SystemConfig) -> Result<Self, DigitError> {
        Ok(Self::new(Digit::new(config.countdown_start)?, config.countdown_step_ms))
    }

    /// Digits in display order.
    pub fn digits(&self) -> Vec<Digit, MAX_STEPS> {
        let mut seq = Vec::new();
        let mut next = Some(self.start);
        while let Some(d) = next {
            if seq.push(d).is_err() {
                break;
            }
            next = d.pred();
        }
        seq
    }

    /// Total time the countdown blocks for.
    pub fn duration_ms(&self) -> u32 {
        self.digits().len() as u32 * self.step_ms
    }

    /// Run the countdown to completion and leave the display blank.
    pub fn run(self, hw: &mut (impl IndicatorPort + DelayPort), sink: &mut impl EventSink) {
        info!(
            "Countdown: {} -> 0, {} ms per step",
            self.start.value(),
            self.step_ms
        );
        for digit in self.digits() {
            hw.show_segments(SegmentPattern::for_digit(digit));
            sink.emit(&AppEvent::CountdownStep(digit));
            hw.delay_ms(self.step_ms);
        }
        hw.clear_display();
        info!("Countdown: finished, display cleared");
    }
}
