//! System configuration parameters
//!
//! All tunable parameters for the countdown and counter logic.
//! Pin assignments are compile-time constants in [`crate::pins`].

use serde::{Deserialize, Serialize};

/// Highest value a 4-LED counter group can show.
pub const MAX_SATURATION_THRESHOLD: u8 = 15;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Countdown ---
    /// First digit shown by the countdown; it counts down to 0 inclusive.
    pub countdown_start: u8,
    /// Time each countdown digit stays on the display (milliseconds)
    pub countdown_step_ms: u32,

    // --- Counters ---
    /// Count at which a counter saturates; the next press completes counting.
    pub saturation_threshold: u8,

    // --- Buttons ---
    /// Time a raw button level must hold before it is accepted (milliseconds).
    /// Zero disables filtering and leaves only the press latch.
    pub debounce_ms: u32,

    // --- Timing ---
    /// Sleep per main-loop iteration while counting (milliseconds)
    pub poll_ms: u32,
    /// Sleep per main-loop iteration once counting is complete (milliseconds)
    pub halt_poll_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Countdown: 5, 4, 3, 2, 1, 0 at one second each
            countdown_start: 5,
            countdown_step_ms: 1000,

            // Counters
            saturation_threshold: MAX_SATURATION_THRESHOLD,

            // Buttons
            debounce_ms: 20,

            // Timing
            poll_ms: 1,
            halt_poll_ms: 100,
        }
    }
}

impl SystemConfig {
    /// Number of digits the countdown shows.
    pub fn countdown_steps(&self) -> u32 {
        self.countdown_start as u32 + 1
    }

    /// Total blocking time of the countdown phase.
    pub fn countdown_duration_ms(&self) -> u32 {
        self.countdown_steps() * self.countdown_step_ms
    }

    /// Range-check every field.  Out-of-range values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_start > 9 {
            return Err(ConfigError::ValidationFailed(
                "countdown_start must be a single digit (0-9)",
            ));
        }
        if self.countdown_step_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "countdown_step_ms must be non-zero",
            ));
        }
        if self.poll_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "poll_ms must be non-zero",
            ));
        }
        if self.saturation_threshold == 0 || self.saturation_threshold > MAX_SATURATION_THRESHOLD {
            return Err(ConfigError::ValidationFailed(
                "saturation_threshold must be within 1-15",
            ));
        }
        Ok(())
    }
}

/// Errors from configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
