//! Integration tests: AppService startup, gating and debounce wiring.

use std::panic::{AssertUnwindSafe, catch_unwind};

use countlatch::app::counter::CounterId;
use countlatch::app::events::AppEvent;
use countlatch::app::ports::ClockPort;
use countlatch::app::service::{AppService, Phase};
use countlatch::config::SystemConfig;
use countlatch::display::segment::{SegmentPattern, encode};

use super::mock_hw::{FakeClock, MockBoard, RecordingSink, tap};

fn level_latch_config() -> SystemConfig {
    SystemConfig {
        debounce_ms: 0,
        ..SystemConfig::default()
    }
}

fn started(config: SystemConfig) -> (AppService, MockBoard, RecordingSink) {
    let mut app = AppService::new(config).unwrap();
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_clears_outputs_before_countdown() {
    let mut app = AppService::new(level_latch_config()).unwrap();
    let mut hw = MockBoard::new();
    hw.leds = [0b1111, 0b1010];
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);

    assert_eq!(hw.leds, [0, 0]);
    assert_eq!(hw.display_history[0], SegmentPattern::BLANK);
    assert_eq!(sink.events[0], AppEvent::Started);
}

#[test]
fn countdown_shows_five_to_zero_then_blanks() {
    let (_app, hw, _sink) = started(level_latch_config());

    let expected: Vec<SegmentPattern> = std::iter::once(SegmentPattern::BLANK)
        .chain([5, 4, 3, 2, 1, 0].map(encode))
        .chain(std::iter::once(SegmentPattern::BLANK))
        .collect();
    assert_eq!(hw.display_history, expected);
    assert_eq!(hw.display, SegmentPattern::BLANK);
}

#[test]
fn countdown_blocks_six_seconds_without_reading_buttons() {
    let (app, hw, _sink) = started(SystemConfig::default());
    assert_eq!(hw.delays, [1000; 6]);
    assert_eq!(hw.total_delay_ms(), 6000);
    assert_eq!(hw.reads, 0);
    assert_eq!(app.phase(), Phase::Counting);
    assert!(app.flags().countdown_finished);
}

#[test]
fn start_emits_phase_change() {
    let (_app, _hw, sink) = started(level_latch_config());
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::PhaseChanged {
            from: Phase::Countdown,
            to: Phase::Counting
        })
    );
    assert_eq!(sink.count(|e| matches!(e, AppEvent::CountdownStep(_))), 6);
}

#[test]
fn second_start_is_ignored() {
    let (mut app, mut hw, mut sink) = started(level_latch_config());
    app.start(&mut hw, &mut sink);
    assert_eq!(hw.delays.len(), 6);
}

#[test]
fn short_countdown_config() {
    let config = SystemConfig {
        countdown_start: 1,
        countdown_step_ms: 10,
        ..level_latch_config()
    };
    let (_app, hw, _sink) = started(config);
    assert_eq!(hw.delays, [10, 10]);
}

// ── Gating ────────────────────────────────────────────────────

#[test]
fn tick_before_start_does_nothing() {
    let mut app = AppService::new(level_latch_config()).unwrap();
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();
    hw.press(CounterId::First);
    app.tick(&mut hw, 0, &mut sink);

    assert_eq!(hw.reads, 0);
    assert_eq!(app.counter(CounterId::First).count(), 0);
    assert_eq!(app.iterations(), 1);
    assert!(sink.events.is_empty());
}

#[test]
fn complete_stops_reading_buttons() {
    let config = SystemConfig {
        saturation_threshold: 1,
        ..level_latch_config()
    };
    let (mut app, mut hw, mut sink) = started(config);
    tap(&mut app, &mut hw, &mut sink, CounterId::First);
    tap(&mut app, &mut hw, &mut sink, CounterId::First);
    assert_eq!(app.phase(), Phase::Complete);

    let reads = hw.reads;
    for _ in 0..10 {
        tap(&mut app, &mut hw, &mut sink, CounterId::Second);
    }
    assert_eq!(hw.reads, reads);
    assert_eq!(app.counter(CounterId::Second).count(), 0);
}

// ── Edge detection ────────────────────────────────────────────

#[test]
fn holding_counts_once() {
    let (mut app, mut hw, mut sink) = started(level_latch_config());
    hw.press(CounterId::First);
    for _ in 0..1000 {
        app.tick(&mut hw, 0, &mut sink);
    }
    assert_eq!(app.counter(CounterId::First).count(), 1);
    assert_eq!(hw.led(CounterId::First), 0b0001);
}

#[test]
fn button_held_through_countdown_counts_after_it() {
    let mut app = AppService::new(level_latch_config()).unwrap();
    let mut hw = MockBoard::new();
    let mut sink = RecordingSink::new();
    hw.press(CounterId::Second);
    app.start(&mut hw, &mut sink);
    assert_eq!(app.counter(CounterId::Second).count(), 0);

    app.tick(&mut hw, 0, &mut sink);
    assert_eq!(app.counter(CounterId::Second).count(), 1);
}

#[test]
fn level_latch_counts_contact_bounce() {
    let (mut app, mut hw, mut sink) = started(level_latch_config());
    hw.chatter = Some(CounterId::First);
    for _ in 0..6 {
        app.tick(&mut hw, 0, &mut sink);
    }
    assert_eq!(app.counter(CounterId::First).count(), 3);
}

#[test]
fn timed_debounce_filters_contact_bounce() {
    let config = SystemConfig {
        debounce_ms: 20,
        ..SystemConfig::default()
    };
    let (mut app, mut hw, mut sink) = started(config);
    let clock = FakeClock::new();

    // 1 ms polling: 8 ms of chatter, then a clean 100 ms hold, then release.
    hw.chatter = Some(CounterId::First);
    for _ in 0..8 {
        app.tick(&mut hw, clock.now_ms(), &mut sink);
        clock.advance(1);
    }
    hw.chatter = None;
    hw.press(CounterId::First);
    for _ in 0..100 {
        app.tick(&mut hw, clock.now_ms(), &mut sink);
        clock.advance(1);
    }
    hw.release(CounterId::First);
    for _ in 0..100 {
        app.tick(&mut hw, clock.now_ms(), &mut sink);
        clock.advance(1);
    }

    assert_eq!(app.counter(CounterId::First).count(), 1);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::ButtonPressed(_))), 1);
}

// ── run() ─────────────────────────────────────────────────────

#[test]
fn run_paces_counting_then_sleeps_once_complete() {
    let config = SystemConfig {
        countdown_start: 0,
        countdown_step_ms: 1,
        saturation_threshold: 1,
        debounce_ms: 0,
        poll_ms: 3,
        halt_poll_ms: 7,
    };
    let mut app = AppService::new(config).unwrap();
    let mut hw = MockBoard::new();
    hw.chatter = Some(CounterId::First);
    hw.panic_on_delay = Some(7);
    let clock = FakeClock::new();
    let mut sink = RecordingSink::new();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        app.run(&mut hw, &clock, &mut sink);
    }));

    // Countdown step, then press (count 1) and release while counting,
    // then the saturating press and the first halt sleep.
    assert!(outcome.is_err());
    assert_eq!(app.phase(), Phase::Complete);
    assert_eq!(hw.delays, [1, 3, 3, 7]);
    assert_eq!(hw.display, encode(1));
}

#[test]
fn run_yields_every_counting_iteration() {
    let config = SystemConfig {
        countdown_start: 0,
        countdown_step_ms: 1,
        debounce_ms: 0,
        poll_ms: 2,
        ..SystemConfig::default()
    };
    let mut app = AppService::new(config).unwrap();
    let mut hw = MockBoard::new();
    hw.panic_on_delay_after = Some(50);
    let clock = FakeClock::new();
    let mut sink = RecordingSink::new();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        app.run(&mut hw, &clock, &mut sink);
    }));

    assert!(outcome.is_err());
    assert_eq!(app.phase(), Phase::Counting);
    assert_eq!(hw.delays.len(), 50);
    assert_eq!(hw.delays[0], 1);
    assert!(hw.delays[1..].iter().all(|&d| d == 2));
    assert_eq!(app.iterations(), 49);
}
