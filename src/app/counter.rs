//! Saturating 4-bit press counter.
//!
//! ```text
//!  COUNTING ──[edge, count < threshold]──▶ COUNTING (count + 1)
//!     │
//!  [edge, count == threshold]
//!     ▼
//!  SATURATED (terminal, all LEDs on)
//! ```
//!
//! A counter reaches `threshold` and stays `Counting`; only the edge after
//! that saturates it.  The counter never decrements or resets.

use crate::display::segment::Digit;

/// All four LEDs of a counter group.
pub const ALL_LEDS: u8 = 0b1111;

/// Identity of a button/counter/LED-group channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterId {
    First,
    Second,
}

impl CounterId {
    /// Processing order within one main-loop iteration.
    pub const ALL: [CounterId; 2] = [CounterId::First, CounterId::Second];

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Digit the display is forced to when this counter saturates.
    pub const fn sentinel(self) -> Digit {
        match self {
            Self::First => Digit::ONE,
            Self::Second => Digit::TWO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    Counting,
    Saturated,
}

/// Result of feeding one rising edge into a [`CounterLatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchOutcome {
    /// The count moved to the carried value.
    Advanced(u8),
    /// This edge saturated the counter.
    Saturated,
    /// The counter was already saturated.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct CounterLatch {
    id: CounterId,
    count: u8,
    threshold: u8,
    state: LatchState,
}

impl CounterLatch {
    pub fn new(id: CounterId, threshold: u8) -> Self {
        debug_assert!(
            (1..=ALL_LEDS).contains(&threshold),
            "threshold {threshold} does not fit four LEDs"
        );
        Self {
            id,
            count: 0,
            threshold: threshold.min(ALL_LEDS),
            state: LatchState::Counting,
        }
    }

    /// Feed one rising edge.
    pub fn on_edge(&mut self) -> LatchOutcome {
        match self.state {
            LatchState::Saturated => LatchOutcome::Ignored,
            LatchState::Counting if self.count >= self.threshold => {
                self.count = self.threshold;
                self.state = LatchState::Saturated;
                LatchOutcome::Saturated
            }
            LatchState::Counting => {
                self.count += 1;
                LatchOutcome::Advanced(self.count)
            }
        }
    }

    /// LED levels for this counter's group, bit i = LED i.
    pub fn led_bits(&self) -> u8 {
        match self.state {
            LatchState::Counting => self.count & ALL_LEDS,
            LatchState::Saturated => ALL_LEDS,
        }
    }

    pub fn id(&self) -> CounterId {
        self.id
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    pub fn is_saturated(&self) -> bool {
        self.state == LatchState::Saturated
    }
}
