//! Host simulator - scripted clock plus broadcast source
//!
//! A `HostSim` plays the role of the OS for a face under test: it owns
//! the wall clock the face reads and the broadcaster the face attaches
//! to, and exposes the three host behaviors as script steps.

use std::sync::Arc;

use glyphclock_core::ClockEvent;
use glyphclock_face::TickBroadcaster;
use glyphclock_time::{ManualClock, WallClock};

/// Milliseconds per minute, the host tick granularity.
pub const MINUTE_MILLIS: i64 = 60_000;

/// Simulated host environment.
pub struct HostSim {
    clock: Arc<ManualClock>,
    broadcaster: TickBroadcaster,
}

impl HostSim {
    /// Host whose wall clock starts at `epoch_millis`.
    pub fn starting_at(epoch_millis: i64) -> Self {
        HostSim {
            clock: Arc::new(ManualClock::new(epoch_millis)),
            broadcaster: TickBroadcaster::new(),
        }
    }

    /// The wall clock a face under test should read.
    pub fn clock(&self) -> Arc<ManualClock> {
        Arc::clone(&self.clock)
    }

    /// Same clock, pre-widened for `ClockFace::new`.
    pub fn wall_clock(&self) -> Arc<dyn WallClock> {
        self.clock() as Arc<dyn WallClock>
    }

    /// The broadcast source a face under test should attach to.
    pub fn broadcaster(&self) -> &TickBroadcaster {
        &self.broadcaster
    }

    /// Advance one minute and fire a tick, `count` times over. Returns
    /// the total number of handler deliveries.
    pub fn tick_minutes(&self, count: u32) -> usize {
        let mut delivered = 0;
        for _ in 0..count {
            self.clock.advance(MINUTE_MILLIS);
            delivered += self.broadcaster.emit(&ClockEvent::TimeTick);
        }
        delivered
    }

    /// Jump the wall clock to an absolute time and fire a time-changed
    /// event, as a manual clock adjustment would.
    pub fn set_time(&self, epoch_millis: i64) -> usize {
        self.clock.set(epoch_millis);
        self.broadcaster.emit(&ClockEvent::TimeChanged)
    }

    /// Fire a zone-change event carrying `zone_id`.
    pub fn change_zone(&self, zone_id: &str) -> usize {
        self.broadcaster
            .emit(&ClockEvent::TimezoneChanged(zone_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphclock_core::{DigitAtlas, FaceError};
    use glyphclock_face::ClockFace;
    use glyphclock_time::ZoneId;
    use proptest::prelude::*;

    const HOUR_MS: i64 = 60 * MINUTE_MILLIS;

    fn attached_face(sim: &HostSim) -> ClockFace {
        let mut face = ClockFace::new(DigitAtlas::sequential(0), sim.wall_clock(), ZoneId::Utc);
        face.attach(sim.broadcaster())
            .expect("fresh face must attach");
        face
    }

    fn digit_values(face: &ClockFace) -> [u32; 4] {
        face.digits().as_array().map(|id| id.value())
    }

    #[test]
    fn test_morning_scenario() {
        // 09:05 UTC
        let sim = HostSim::starting_at(9 * HOUR_MS + 5 * MINUTE_MILLIS);
        let face = attached_face(&sim);

        assert_eq!(digit_values(&face), [0, 9, 0, 5]);
    }

    #[test]
    fn test_day_end_scenario() {
        // 23:58 UTC, one tick into 23:59
        let sim = HostSim::starting_at(23 * HOUR_MS + 58 * MINUTE_MILLIS);
        let face = attached_face(&sim);

        assert_eq!(sim.tick_minutes(1), 1);
        assert_eq!(digit_values(&face), [2, 3, 5, 9]);
    }

    #[test]
    fn test_midnight_rollover() {
        // 23:59 UTC rolls into 00:00
        let sim = HostSim::starting_at(23 * HOUR_MS + 59 * MINUTE_MILLIS);
        let face = attached_face(&sim);

        sim.tick_minutes(1);
        assert_eq!(digit_values(&face), [0, 0, 0, 0]);
        assert_eq!(face.local_hour_minute(), (0, 0));
    }

    #[test]
    fn test_zone_change_uses_new_zone_before_next_tick() {
        // 00:30 UTC; the zone change alone must re-derive as 09:30.
        let sim = HostSim::starting_at(30 * MINUTE_MILLIS);
        let face = attached_face(&sim);
        assert_eq!(digit_values(&face), [0, 0, 3, 0]);

        assert_eq!(sim.change_zone("UTC+9"), 1);
        assert_eq!(digit_values(&face), [0, 9, 3, 0]);

        // The following tick keeps deriving under the new zone.
        sim.tick_minutes(1);
        assert_eq!(digit_values(&face), [0, 9, 3, 1]);
    }

    #[test]
    fn test_manual_time_change() {
        let sim = HostSim::starting_at(0);
        let face = attached_face(&sim);

        sim.set_time(14 * HOUR_MS + 45 * MINUTE_MILLIS);
        assert_eq!(digit_values(&face), [1, 4, 4, 5]);
    }

    #[test]
    fn test_teardown_freezes_face() {
        let sim = HostSim::starting_at(9 * HOUR_MS);
        let mut face = attached_face(&sim);

        sim.tick_minutes(2);
        let frozen_digits = digit_values(&face);
        let frozen_frame = face.frame();

        face.detach();
        assert_eq!(sim.tick_minutes(30), 0);

        assert_eq!(digit_values(&face), frozen_digits);
        assert_eq!(face.frame(), frozen_frame);
    }

    #[test]
    fn test_second_face_cannot_share_subscription_slot() {
        let sim = HostSim::starting_at(0);
        let mut face = attached_face(&sim);

        assert_eq!(face.attach(sim.broadcaster()), Err(FaceError::AlreadyObserving));

        // A separate face attaches fine alongside.
        let _second = attached_face(&sim);
        assert_eq!(sim.broadcaster().subscriber_count(), 2);
    }

    proptest! {
        #[test]
        fn prop_ticks_track_minutes(start_minute in 0u32..1440, ticks in 0u32..240) {
            let sim = HostSim::starting_at(start_minute as i64 * MINUTE_MILLIS);
            let face = attached_face(&sim);
            sim.tick_minutes(ticks);

            let total = (start_minute + ticks) % 1440;
            prop_assert_eq!(face.local_hour_minute(), (total / 60, total % 60));
        }
    }
}
