//! Error types for glyphclock
//!
//! The refresh path itself is total: digit resolution clamps, zone
//! resolution falls back, event handling cannot fail. What remains is
//! lifecycle misuse by the embedder.

use thiserror::Error;

/// Face lifecycle errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceError {
    #[error("face is already observing a tick source")]
    AlreadyObserving,
}

/// Result type for glyphclock operations
pub type FaceResult<T> = Result<T, FaceError>;
