//! glyphclock Time - Wall-clock sources and zone-local derivation
//!
//! This crate holds everything time-shaped:
//! - `WallClock`: the seam between the face and the OS clock
//! - `ZoneId`: total resolution of host zone-id strings
//! - `ClockState`: the single source the displayed digits derive from

pub mod clock;
pub mod state;
pub mod zone;

pub use clock::*;
pub use state::*;
pub use zone::*;
