//! countlatch firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  Board (Indicator + Button + Delay)   LogEventSink       │
//! │   ├─ OutputGroup ×4 (PinDriver)       SystemTimer        │
//! │   └─ InputLine ×2  (PinDriver)        (ClockPort)        │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ───────────────    │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            AppService (superloop)                  │  │
//! │  │  Countdown · Debounce ×2 · CounterLatch ×2         │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use log::info;

use countlatch::adapters::board::Board;
use countlatch::adapters::gpio::{InputLine, OutputGroup};
use countlatch::adapters::log_sink::LogEventSink;
use countlatch::adapters::time::SystemTimer;
use countlatch::app::service::AppService;
use countlatch::config::SystemConfig;
use countlatch::error::Error;
use countlatch::pins;

type OutLine = PinDriver<'static, AnyOutputPin, Output>;
type InLine = PinDriver<'static, AnyIOPin, Input>;

/// Claim `gpios` as push-pull outputs, driven low.
fn output_group<const N: usize>(
    name: &'static str,
    gpios: [i32; N],
) -> Result<OutputGroup<OutLine, N>> {
    let mut lines = heapless::Vec::<OutLine, N>::new();
    for gpio in gpios {
        // SAFETY: every GPIO in `pins` is claimed exactly once, here, and
        // `Peripherals::take()` is never called in this firmware.
        let pin = unsafe { AnyOutputPin::new(gpio as _) };
        let mut driver = PinDriver::output(pin)?;
        driver.set_low()?;
        lines
            .push(driver)
            .map_err(|_| Error::Init("output group overflow"))?;
    }
    let lines = lines
        .into_array()
        .map_err(|_| Error::Init("output group is missing lines"))?;
    Ok(OutputGroup::new(name, lines))
}

/// Claim `gpio` as an input with the internal pull-up enabled.
///
/// Claimed as an IO pin: the HAL only offers pull configuration on pins
/// that can also drive.
fn button(name: &'static str, gpio: i32) -> Result<InputLine<InLine>> {
    // SAFETY: see `output_group`.
    let pin = unsafe { AnyIOPin::new(gpio as _) };
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(InputLine::new(name, driver))
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("countlatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    info!(
        "Config: countdown {}x{} ms, saturate at {}, debounce {} ms, poll {} ms",
        config.countdown_steps(),
        config.countdown_step_ms,
        config.saturation_threshold,
        config.debounce_ms,
        config.poll_ms
    );
    let mut app = AppService::new(config)?;

    // ── 3. Claim pins ─────────────────────────────────────────
    let led_a = output_group("led-a", pins::LED_GROUP_A_GPIOS)?;
    let led_b = output_group("led-b", pins::LED_GROUP_B_GPIOS)?;
    let segments = output_group("seg-a-f", pins::SEGMENT_AF_GPIOS)?;
    let segment_g = output_group("seg-g", [pins::SEGMENT_G_GPIO])?;
    let buttons = [
        button("button-1", pins::BUTTON_1_GPIO)?,
        button("button-2", pins::BUTTON_2_GPIO)?,
    ];

    let mut board = Board::new(
        [led_a, led_b],
        segments,
        segment_g,
        buttons,
        SystemTimer::new(),
    );
    let clock = SystemTimer::new();
    let mut sink = LogEventSink::new();

    info!("Peripherals ready, starting countdown");

    // ── 4. Superloop (never returns) ──────────────────────────
    app.run(&mut board, &clock, &mut sink)
}
