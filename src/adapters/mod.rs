//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements            | Connects to                  |
//! |------------|-----------------------|------------------------------|
//! | `gpio`     | DigitalOutputGroup    | `embedded-hal` output pins   |
//! |            | DigitalInput          | `embedded-hal` input pins    |
//! | `board`    | IndicatorPort         | LED groups, 7-segment lines  |
//! |            | ButtonPort            | Button inputs                |
//! |            | DelayPort             | `embedded-hal` delay         |
//! | `log_sink` | EventSink             | Serial log output            |
//! | `time`     | ClockPort, DelayNs    | ESP32 system timer / host    |

pub mod board;
pub mod gpio;
pub mod log_sink;
pub mod time;
