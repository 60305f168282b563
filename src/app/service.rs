//! Application service: the superloop core.
//!
//! [`AppService`] owns both debouncers, both counters and the global
//! flags.  All I/O flows through port traits injected at call sites,
//! making the whole loop testable with mock adapters.
//!
//! ```text
//!   ButtonPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                  │          AppService           │
//!  IndicatorPort ◀─│ Countdown · Debounce · Latch  │
//!                  └──────────────────────────────┘
//! ```
//!
//! ```text
//!  COUNTDOWN ──[sequence done]──▶ COUNTING ──[any counter saturates]──▶ COMPLETE
//! ```
//!
//! `Complete` is terminal.  [`AppService::run`] sleeps there instead of
//! spinning.

use log::{debug, info, warn};

use crate::app::counter::{ALL_LEDS, CounterId, CounterLatch, LatchOutcome};
use crate::config::SystemConfig;
use crate::display::countdown::CountdownSequencer;
use crate::display::segment::SegmentPattern;
use crate::drivers::button::ButtonDebouncer;
use crate::error::Result;

use super::events::AppEvent;
use super::ports::{ButtonPort, ClockPort, DelayPort, EventSink, IndicatorPort};

/// Main-loop phase, derived from [`GlobalFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Countdown,
    Counting,
    Complete,
}

/// Process-wide flags.  Each is set once and never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalFlags {
    pub countdown_finished: bool,
    pub counting_complete: bool,
}

impl GlobalFlags {
    pub fn phase(self) -> Phase {
        if !self.countdown_finished {
            Phase::Countdown
        } else if self.counting_complete {
            Phase::Complete
        } else {
            Phase::Counting
        }
    }

    /// Button processing is allowed only between countdown and completion.
    pub fn accepts_input(self) -> bool {
        self.countdown_finished && !self.counting_complete
    }
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    config: SystemConfig,
    /// Taken by [`start`](Self::start); `None` once the countdown has run.
    countdown: Option<CountdownSequencer>,
    debouncers: [ButtonDebouncer; 2],
    counters: [CounterLatch; 2],
    flags: GlobalFlags,
    display: SegmentPattern,
    iterations: u64,
}

impl AppService {
    /// Validate `config` and build the service.
    ///
    /// Does **not** touch any output; call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Result<Self> {
        config.validate()?;
        let countdown = CountdownSequencer::from_config(&config)?;
        let debounce_ms = config.debounce_ms;
        let threshold = config.saturation_threshold;

        Ok(Self {
            countdown: Some(countdown),
            debouncers: core::array::from_fn(|_| ButtonDebouncer::new(debounce_ms)),
            counters: CounterId::ALL.map(|id| CounterLatch::new(id, threshold)),
            flags: GlobalFlags::default(),
            display: SegmentPattern::BLANK,
            iterations: 0,
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Startup phase: all outputs off, blocking countdown, display blank.
    /// Runs at most once; later calls are ignored.
    pub fn start(&mut self, hw: &mut (impl IndicatorPort + DelayPort), sink: &mut impl EventSink) {
        let Some(countdown) = self.countdown.take() else {
            warn!("AppService: start() called twice, ignoring");
            return;
        };

        for id in CounterId::ALL {
            hw.show_leds(id, 0);
        }
        hw.clear_display();
        sink.emit(&AppEvent::Started);
        info!("AppService started, outputs cleared");

        countdown.run(hw, sink);
        self.display = SegmentPattern::BLANK;

        let from = self.phase();
        self.flags.countdown_finished = true;
        self.announce_phase(from, sink);
    }

    /// One superloop iteration.
    ///
    /// Gated on the flags: before the countdown finishes or after counting
    /// completes this does nothing.  Otherwise both buttons are sampled and
    /// processed in fixed order, first then second.
    pub fn tick(
        &mut self,
        hw: &mut (impl ButtonPort + IndicatorPort),
        now_ms: u32,
        sink: &mut impl EventSink,
    ) {
        self.iterations += 1;
        if !self.flags.accepts_input() {
            return;
        }

        // Gated once per iteration: the second button is still processed
        // after the first saturates, and a second saturation wins the display.
        let raw = CounterId::ALL.map(|id| hw.read_raw(id));
        for id in CounterId::ALL {
            self.process_button(id, raw[id.index()], now_ms, hw, sink);
        }
    }

    /// Start, then loop forever.  Each counting iteration sleeps `poll_ms`
    /// so the idle task gets scheduled; once complete, `halt_poll_ms`.
    pub fn run(
        &mut self,
        hw: &mut (impl ButtonPort + IndicatorPort + DelayPort),
        clock: &impl ClockPort,
        sink: &mut impl EventSink,
    ) -> ! {
        self.start(hw, sink);
        info!("Entering main loop");
        loop {
            self.tick(hw, clock.now_ms(), sink);
            let pause_ms = if self.flags.counting_complete {
                self.config.halt_poll_ms
            } else {
                self.config.poll_ms
            };
            hw.delay_ms(pause_ms);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.flags.phase()
    }

    pub fn flags(&self) -> GlobalFlags {
        self.flags
    }

    pub fn counter(&self, id: CounterId) -> &CounterLatch {
        &self.counters[id.index()]
    }

    /// Pattern currently driven onto the display.
    pub fn display(&self) -> SegmentPattern {
        self.display
    }

    /// Total `tick()` calls, including gated ones.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn process_button(
        &mut self,
        id: CounterId,
        raw_high: bool,
        now_ms: u32,
        hw: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) {
        let idx = id.index();
        if self.debouncers[idx].update(raw_high, now_ms).is_none() {
            return;
        }
        debug!("Button {:?}: rising edge at {} ms", id, now_ms);
        sink.emit(&AppEvent::ButtonPressed(id));

        match self.counters[idx].on_edge() {
            LatchOutcome::Advanced(count) => {
                hw.show_leds(id, self.counters[idx].led_bits());
                sink.emit(&AppEvent::CounterAdvanced { counter: id, count });
            }
            LatchOutcome::Saturated => {
                let sentinel = id.sentinel();
                hw.show_leds(id, ALL_LEDS);
                self.display = SegmentPattern::for_digit(sentinel);
                hw.show_segments(self.display);

                let from = self.phase();
                self.flags.counting_complete = true;
                info!(
                    "Counter {:?} saturated at {}, display -> {}",
                    id,
                    self.counters[idx].count(),
                    sentinel.value()
                );
                sink.emit(&AppEvent::CounterSaturated {
                    counter: id,
                    sentinel,
                });
                self.announce_phase(from, sink);
            }
            LatchOutcome::Ignored => {}
        }
    }

    fn announce_phase(&self, from: Phase, sink: &mut impl EventSink) {
        let to = self.phase();
        if from != to {
            info!("Phase: {:?} -> {:?}", from, to);
            sink.emit(&AppEvent::PhaseChanged { from, to });
        }
    }
}
