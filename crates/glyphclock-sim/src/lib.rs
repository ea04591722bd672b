//! glyphclock Sim - Host simulation harness
//!
//! Scripts the environment a clock face runs in: one manually driven
//! wall clock and one broadcast source, with helpers matching the tick
//! cadence a real host provides (at least once per minute boundary).

pub mod simulator;

pub use simulator::*;
