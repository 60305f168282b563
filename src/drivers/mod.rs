//! Input conditioning for board peripherals.

pub mod button;
