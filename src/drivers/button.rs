//! Polled button debouncer with a one-shot press latch.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up: a press reads logic 0.
//! The main loop samples the raw level every iteration and calls
//! [`ButtonDebouncer::update`].
//!
//! ## Stages
//!
//! 1. **Settle filter**: a raw level must hold for `debounce_ms` before it
//!    becomes the accepted level.  With `debounce_ms == 0` the raw level is
//!    accepted immediately.
//! 2. **Press latch**: the first accepted "pressed" sample emits one
//!    [`ButtonEvent::Pressed`] and arms the latch; the latch clears only on
//!    an accepted "released" sample.  Holding the button emits nothing more.

/// Button events emitted by the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
}

#[derive(Debug, Clone)]
pub struct ButtonDebouncer {
    debounce_ms: u32,
    /// Rising edge already consumed while the button stays down.
    pressed_latched: bool,
    /// Level that has survived the settle filter.
    stable: bool,
    /// Most recent raw level and when it was first seen.
    candidate: bool,
    candidate_since_ms: u32,
}

impl ButtonDebouncer {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            pressed_latched: false,
            stable: false,
            candidate: false,
            candidate_since_ms: 0,
        }
    }

    /// Feed one raw pin sample (`raw_high == false` means pressed).
    /// `now_ms` is the current monotonic time in milliseconds.
    pub fn update(&mut self, raw_high: bool, now_ms: u32) -> Option<ButtonEvent> {
        let pressed = self.settle(!raw_high, now_ms);

        if pressed && !self.pressed_latched {
            self.pressed_latched = true;
            return Some(ButtonEvent::Pressed);
        }
        if !pressed {
            self.pressed_latched = false;
        }
        None
    }

    /// Whether the current press has already been reported.
    pub fn is_latched(&self) -> bool {
        self.pressed_latched
    }

    fn settle(&mut self, pressed: bool, now_ms: u32) -> bool {
        if self.debounce_ms == 0 {
            self.stable = pressed;
            return pressed;
        }

        if pressed != self.candidate {
            self.candidate = pressed;
            self.candidate_since_ms = now_ms;
        }
        if self.candidate != self.stable
            && now_ms.wrapping_sub(self.candidate_since_ms) >= self.debounce_ms
        {
            self.stable = self.candidate;
        }
        self.stable
    }
}
