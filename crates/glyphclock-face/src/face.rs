//! Clock face - the tick-driven refresh loop
//!
//! The face is an observer state machine: Idle (not subscribed) and
//! Active (subscribed to tick, time-change, and zone-change events).
//! Every event refreshes the epoch reading, re-resolves the zone if the
//! event carried one, bumps the frame counter, and fires the redraw
//! hook. Digits are derived on demand from the current state, so the
//! displayed quad can never go stale relative to it.

use std::sync::Arc;

use glyphclock_core::{ClockEvent, DigitAtlas, DigitQuad, FaceError, FaceResult};
use glyphclock_time::{ClockState, WallClock, ZoneId};
use parking_lot::Mutex;

use crate::{EventFilter, Subscription, TickBroadcaster};

/// Redraw callback, invoked after every refresh while attached.
pub type RedrawHook = Box<dyn Fn() + Send>;

struct FaceInner {
    state: ClockState,
    atlas: DigitAtlas,
    frame: u64,
    redraw: Option<RedrawHook>,
}

impl FaceInner {
    fn handle(&mut self, clock: &dyn WallClock, event: &ClockEvent) {
        if let ClockEvent::TimezoneChanged(zone_id) = event {
            let zone = ZoneId::resolve(zone_id);
            tracing::debug!(%zone, "time zone changed");
            self.state.set_zone(zone);
        }
        self.state.refresh(clock);
        self.frame = self.frame.wrapping_add(1);
        if let Some(hook) = &self.redraw {
            hook();
        }
    }
}

/// A digit-image clock face.
///
/// Holds the clock state and the digit atlas; exposes the derived quad
/// for a rendering collaborator. Detach runs on drop through the
/// subscription guard, so teardown cannot leak a live handler.
pub struct ClockFace {
    clock: Arc<dyn WallClock>,
    inner: Arc<Mutex<FaceInner>>,
    subscription: Option<Subscription>,
}

impl ClockFace {
    /// New face in the Idle state, reading its initial time from `clock`.
    pub fn new(atlas: DigitAtlas, clock: Arc<dyn WallClock>, zone: ZoneId) -> Self {
        let state = ClockState::new(clock.as_ref(), zone);
        ClockFace {
            clock,
            inner: Arc::new(Mutex::new(FaceInner {
                state,
                atlas,
                frame: 0,
                redraw: None,
            })),
            subscription: None,
        }
    }

    /// Idle -> Active: subscribe to the three clock event kinds.
    pub fn attach(&mut self, host: &TickBroadcaster) -> FaceResult<()> {
        if self.subscription.is_some() {
            return Err(FaceError::AlreadyObserving);
        }
        let clock = Arc::clone(&self.clock);
        let inner = Arc::clone(&self.inner);
        let subscription = host.subscribe(EventFilter::all(), move |event| {
            inner.lock().handle(clock.as_ref(), event);
        });
        self.subscription = Some(subscription);
        tracing::debug!("clock face attached");
        Ok(())
    }

    /// Active -> Idle: drop the subscription. Idempotent; also runs
    /// implicitly when the face itself is dropped.
    pub fn detach(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("clock face detached");
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Current displayed digits, derived from the clock state.
    pub fn digits(&self) -> DigitQuad {
        let inner = self.inner.lock();
        inner.state.digits(&inner.atlas)
    }

    /// Zone-local `(hour, minute)` behind the current digits.
    pub fn local_hour_minute(&self) -> (u32, u32) {
        self.inner.lock().state.local_hour_minute()
    }

    /// Epoch reading behind the current digits, in milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.inner.lock().state.epoch_millis()
    }

    /// Active zone behind the current digits.
    pub fn zone(&self) -> ZoneId {
        self.inner.lock().state.zone().clone()
    }

    /// Count of refreshes since creation, for poll-style collaborators.
    pub fn frame(&self) -> u64 {
        self.inner.lock().frame
    }

    /// Register the redraw callback fired after each refresh. Replaces
    /// any previous hook.
    pub fn on_redraw(&self, hook: impl Fn() + Send + 'static) {
        self.inner.lock().redraw = Some(Box::new(hook));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphclock_time::ManualClock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const MINUTE_MS: i64 = 60_000;
    const HOUR_MS: i64 = 60 * MINUTE_MS;

    fn face_at(epoch_millis: i64) -> (ClockFace, Arc<ManualClock>, TickBroadcaster) {
        let clock = Arc::new(ManualClock::new(epoch_millis));
        let face = ClockFace::new(
            DigitAtlas::sequential(0),
            Arc::clone(&clock) as Arc<dyn WallClock>,
            ZoneId::Utc,
        );
        (face, clock, TickBroadcaster::new())
    }

    #[test]
    fn test_tick_refreshes_digits() {
        let (mut face, clock, host) = face_at(9 * HOUR_MS + 5 * MINUTE_MS);
        face.attach(&host).unwrap();
        assert_eq!(face.local_hour_minute(), (9, 5));

        clock.advance(MINUTE_MS);
        host.emit(&ClockEvent::TimeTick);

        assert_eq!(face.local_hour_minute(), (9, 6));
        assert_eq!(face.frame(), 1);
    }

    #[test]
    fn test_time_changed_behaves_like_tick() {
        let (mut face, clock, host) = face_at(0);
        face.attach(&host).unwrap();

        clock.set(23 * HOUR_MS + 59 * MINUTE_MS);
        host.emit(&ClockEvent::TimeChanged);

        assert_eq!(face.local_hour_minute(), (23, 59));
    }

    #[test]
    fn test_timezone_change_rederives_before_next_tick() {
        // 00:30 UTC; the zone change alone must move the face to 09:30.
        let (mut face, _clock, host) = face_at(30 * MINUTE_MS);
        face.attach(&host).unwrap();
        assert_eq!(face.local_hour_minute(), (0, 30));

        host.emit(&ClockEvent::TimezoneChanged("UTC+9".to_string()));

        assert_eq!(face.local_hour_minute(), (9, 30));
        assert_eq!(face.zone(), ZoneId::resolve("UTC+9"));
    }

    #[test]
    fn test_double_attach_is_an_error() {
        let (mut face, _clock, host) = face_at(0);
        face.attach(&host).unwrap();
        assert_eq!(face.attach(&host), Err(FaceError::AlreadyObserving));
        assert!(face.is_active());
    }

    #[test]
    fn test_detach_stops_updates() {
        let (mut face, clock, host) = face_at(0);
        face.attach(&host).unwrap();
        face.detach();
        face.detach(); // idempotent

        clock.advance(HOUR_MS);
        assert_eq!(host.emit(&ClockEvent::TimeTick), 0);

        // State frozen at the attach-time reading.
        assert_eq!(face.epoch_millis(), 0);
        assert_eq!(face.frame(), 0);
        assert!(!face.is_active());
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (mut face, _clock, host) = face_at(0);
        face.attach(&host).unwrap();
        assert_eq!(host.subscriber_count(), 1);

        drop(face);
        assert_eq!(host.subscriber_count(), 0);
    }

    #[test]
    fn test_redraw_hook_fires_per_event() {
        let (mut face, _clock, host) = face_at(0);
        let redraws = Arc::new(AtomicUsize::new(0));
        let redraws_hook = Arc::clone(&redraws);
        face.on_redraw(move || {
            redraws_hook.fetch_add(1, Ordering::SeqCst);
        });
        face.attach(&host).unwrap();

        host.emit(&ClockEvent::TimeTick);
        host.emit(&ClockEvent::TimeChanged);
        host.emit(&ClockEvent::TimezoneChanged("UTC".to_string()));

        assert_eq!(redraws.load(Ordering::SeqCst), 3);
        assert_eq!(face.frame(), 3);
    }

    #[test]
    fn test_reattach_after_detach() {
        let (mut face, clock, host) = face_at(0);
        face.attach(&host).unwrap();
        face.detach();
        face.attach(&host).unwrap();

        clock.set(12 * HOUR_MS);
        host.emit(&ClockEvent::TimeTick);
        assert_eq!(face.local_hour_minute(), (12, 0));
    }
}
