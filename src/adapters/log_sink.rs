//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (ESP-IDF logger on target, whatever the host installs
//! in tests).

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | outputs cleared");
            }
            AppEvent::CountdownStep(digit) => {
                info!("COUNTDOWN | {}", digit.value());
            }
            AppEvent::PhaseChanged { from, to } => {
                info!("PHASE | {:?} -> {:?}", from, to);
            }
            AppEvent::ButtonPressed(counter) => {
                debug!("BUTTON | {:?} pressed", counter);
            }
            AppEvent::CounterAdvanced { counter, count } => {
                info!("COUNT | {:?} = {} (0b{:04b})", counter, count, count);
            }
            AppEvent::CounterSaturated { counter, sentinel } => {
                info!(
                    "SATURATED | {:?}, display shows {}",
                    counter,
                    sentinel.value()
                );
            }
        }
    }
}
