//! 7-segment display logic: glyph encoding and the startup countdown.

pub mod countdown;
pub mod segment;
