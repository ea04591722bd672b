//! glyphclock Core - Fundamental types and primitives
//!
//! This crate defines the types shared across glyphclock:
//! - Digit image identifiers and the ten-entry atlas
//! - The derived four-digit view of a wall-clock time
//! - The clock event model (tick, time change, zone change)
//! - Error types

pub mod atlas;
pub mod digits;
pub mod error;
pub mod event;

pub use atlas::*;
pub use digits::*;
pub use error::*;
pub use event::*;
