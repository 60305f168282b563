//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::display::segment::Digit;

use super::counter::CounterId;
use super::service::Phase;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Outputs initialised; the countdown is about to run.
    Started,

    /// The countdown put `digit` on the display.
    CountdownStep(Digit),

    /// The main loop moved between phases.
    PhaseChanged { from: Phase, to: Phase },

    /// A debounced rising edge was accepted for `counter`.
    ButtonPressed(CounterId),

    /// A counter advanced to `count` and its LEDs were updated.
    CounterAdvanced { counter: CounterId, count: u8 },

    /// A counter saturated; the display now shows its sentinel digit.
    CounterSaturated { counter: CounterId, sentinel: Digit },
}
