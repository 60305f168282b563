//! Mock board adapter for integration tests.
//!
//! Holds the last level written to every output and records display
//! history and delays, so tests can assert on what a user would see
//! without touching real GPIO registers.

use std::cell::Cell;

use countlatch::app::counter::CounterId;
use countlatch::app::events::AppEvent;
use countlatch::app::ports::{ButtonPort, ClockPort, DelayPort, EventSink, IndicatorPort};
use countlatch::app::service::AppService;
use countlatch::display::segment::SegmentPattern;

// ── MockBoard ─────────────────────────────────────────────────

pub struct MockBoard {
    /// Last bits written to each LED group.
    pub leds: [u8; 2],
    /// Pattern currently on the display.
    pub display: SegmentPattern,
    pub display_history: Vec<SegmentPattern>,
    /// Raw pin levels; `true` = released (pulled up).
    pub raw: [bool; 2],
    pub reads: u32,
    pub delays: Vec<u32>,
    /// Flip this button's level on every read.
    pub chatter: Option<CounterId>,
    /// Panic on a delay of exactly this length (breaks out of `run`).
    pub panic_on_delay: Option<u32>,
    /// Panic once this many delays have been recorded.
    pub panic_on_delay_after: Option<usize>,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self {
            leds: [0; 2],
            display: SegmentPattern::BLANK,
            display_history: Vec::new(),
            raw: [true; 2],
            reads: 0,
            delays: Vec::new(),
            chatter: None,
            panic_on_delay: None,
            panic_on_delay_after: None,
        }
    }

    pub fn press(&mut self, id: CounterId) {
        self.raw[id.index()] = false;
    }

    pub fn release(&mut self, id: CounterId) {
        self.raw[id.index()] = true;
    }

    pub fn led(&self, id: CounterId) -> u8 {
        self.leds[id.index()]
    }

    pub fn total_delay_ms(&self) -> u64 {
        self.delays.iter().map(|&d| u64::from(d)).sum()
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorPort for MockBoard {
    fn show_leds(&mut self, counter: CounterId, bits: u8) {
        self.leds[counter.index()] = bits;
    }

    fn show_segments(&mut self, pattern: SegmentPattern) {
        self.display = pattern;
        self.display_history.push(pattern);
    }
}

impl ButtonPort for MockBoard {
    fn read_raw(&mut self, button: CounterId) -> bool {
        self.reads += 1;
        if self.chatter == Some(button) {
            self.raw[button.index()] = !self.raw[button.index()];
        }
        self.raw[button.index()]
    }
}

impl DelayPort for MockBoard {
    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        if self.panic_on_delay == Some(ms) {
            panic!("halt delay reached");
        }
        if self.panic_on_delay_after == Some(self.delays.len()) {
            panic!("delay budget reached");
        }
    }
}

// ── FakeClock ─────────────────────────────────────────────────

pub struct FakeClock(Cell<u32>);

#[allow(dead_code)]
impl FakeClock {
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

impl ClockPort for FakeClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

// ── Helpers ───────────────────────────────────────────────────

/// One full press-release cycle of `id`, one loop iteration each.
#[allow(dead_code)]
pub fn tap(app: &mut AppService, hw: &mut MockBoard, sink: &mut RecordingSink, id: CounterId) {
    hw.press(id);
    app.tick(hw, 0, sink);
    hw.release(id);
    app.tick(hw, 0, sink);
}
