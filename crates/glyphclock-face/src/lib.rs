//! glyphclock Face - Tick-driven refresh loop
//!
//! This crate implements the observing side of the clock:
//! - `TickBroadcaster`: subscription registry standing in for the host
//!   broadcast mechanism, with RAII unsubscribe guards
//! - `ClockFace`: the Idle/Active observer state machine that refreshes
//!   clock state on tick, time-change, and zone-change events
//! - `SlotLayout` / `DigitRenderer`: the fixed-slot draw seam for a
//!   rendering collaborator

pub mod broadcast;
pub mod face;
pub mod layout;

pub use broadcast::*;
pub use face::*;
pub use layout::*;
