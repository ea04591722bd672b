//! Clock state - the single source the displayed digits derive from

use glyphclock_core::{DigitAtlas, DigitQuad};

use crate::{WallClock, ZoneId};

/// Wall-clock state owned by the refresh loop: an epoch timestamp plus
/// the active time zone.
///
/// INVARIANT: mutated only in response to clock events (tick, time
/// change, zone change); the digit quad is always derived from the
/// state as it stands, never cached beside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockState {
    epoch_millis: i64,
    zone: ZoneId,
}

impl ClockState {
    /// State reading the current time from `clock`.
    pub fn new(clock: &dyn WallClock, zone: ZoneId) -> Self {
        ClockState {
            epoch_millis: clock.now_millis(),
            zone,
        }
    }

    /// State pinned to a specific instant, for tests and projections.
    pub fn at(epoch_millis: i64, zone: ZoneId) -> Self {
        ClockState { epoch_millis, zone }
    }

    /// Re-read the wall clock. Handles both the periodic tick and a
    /// manual time change; the two are indistinguishable here.
    pub fn refresh(&mut self, clock: &dyn WallClock) {
        self.epoch_millis = clock.now_millis();
    }

    /// Swap the active zone. Takes effect on the next derivation since
    /// derivation always reads the current zone.
    pub fn set_zone(&mut self, zone: ZoneId) {
        self.zone = zone;
    }

    #[inline]
    pub fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    #[inline]
    pub fn zone(&self) -> &ZoneId {
        &self.zone
    }

    /// Zone-local `(hour, minute)` for the held timestamp.
    pub fn local_hour_minute(&self) -> (u32, u32) {
        self.zone.local_hour_minute(self.epoch_millis)
    }

    /// Derive the displayed digits. Pure projection of this state.
    pub fn digits(&self, atlas: &DigitAtlas) -> DigitQuad {
        let (hour, minute) = self.local_hour_minute();
        DigitQuad::derive(atlas, hour, minute)
    }
}
