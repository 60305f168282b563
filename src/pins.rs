//! GPIO pin assignments for the countlatch board (ESP32-S3 retarget).
//!
//! Single source of truth: the firmware entry point claims every pin from
//! here rather than hard-coding numbers.  Change a pin here and it
//! propagates everywhere.

// ---------------------------------------------------------------------------
// Push-buttons (active-low, internal pull-up)
// ---------------------------------------------------------------------------

pub const BUTTON_1_GPIO: i32 = 1;
pub const BUTTON_2_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// LED bars, LSB first: index i shows bit i of the count
// ---------------------------------------------------------------------------

pub const LED_GROUP_A_GPIOS: [i32; 4] = [4, 5, 6, 7];
pub const LED_GROUP_B_GPIOS: [i32; 4] = [15, 16, 17, 18];

// ---------------------------------------------------------------------------
// 7-segment display (common cathode, segment on = HIGH)
// ---------------------------------------------------------------------------

/// Segments a–f, in that order.
pub const SEGMENT_AF_GPIOS: [i32; 6] = [8, 9, 10, 11, 12, 13];
/// Segment g, on its own line.
pub const SEGMENT_G_GPIO: i32 = 14;

/// Every assigned GPIO, for overlap checks.
pub const ALL_GPIOS: [i32; 17] = [
    BUTTON_1_GPIO,
    BUTTON_2_GPIO,
    LED_GROUP_A_GPIOS[0],
    LED_GROUP_A_GPIOS[1],
    LED_GROUP_A_GPIOS[2],
    LED_GROUP_A_GPIOS[3],
    LED_GROUP_B_GPIOS[0],
    LED_GROUP_B_GPIOS[1],
    LED_GROUP_B_GPIOS[2],
    LED_GROUP_B_GPIOS[3],
    SEGMENT_AF_GPIOS[0],
    SEGMENT_AF_GPIOS[1],
    SEGMENT_AF_GPIOS[2],
    SEGMENT_AF_GPIOS[3],
    SEGMENT_AF_GPIOS[4],
    SEGMENT_AF_GPIOS[5],
    SEGMENT_G_GPIO,
];
