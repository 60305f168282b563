//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the rules of the countdown-and-counters board:
//! the superloop orchestration and the saturating counters.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod counter;
pub mod events;
pub mod ports;
pub mod service;
