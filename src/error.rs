//! Unified error types for the countlatch firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! firmware entry point's error handling uniform.  All variants are `Copy`.

use core::fmt;

use crate::config::ConfigError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation.
    Config(ConfigError),
    /// A digit outside 0-9 was handed to the segment encoder.
    Digit(DigitError),
    /// A GPIO line could not be driven or read.
    Gpio(GpioError),
    /// Peripheral initialisation failed (pin claiming in the firmware binary).
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Digit(e) => write!(f, "digit: {e}"),
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Digit errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitError {
    /// The value has no 7-segment glyph.
    OutOfRange(u8),
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(n) => write!(f, "{n} is not a decimal digit"),
        }
    }
}

impl From<DigitError> for Error {
    fn from(e: DigitError) -> Self {
        Self::Digit(e)
    }
}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Output level write failed on the given line index.
    WriteFailed(usize),
    /// Input level read failed.
    ReadFailed,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed(line) => write!(f, "write failed on line {line}"),
            Self::ReadFailed => write!(f, "read failed"),
        }
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
