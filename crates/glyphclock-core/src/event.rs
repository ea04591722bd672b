//! Clock event model
//!
//! Events mirror the three host notifications a clock face observes:
//! the periodic minute tick, a manual time adjustment, and a time-zone
//! change. The zone change carries the new zone id as a string payload.

/// A clock-refresh event delivered by the host tick source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClockEvent {
    /// Periodic tick; fires at least once per minute boundary.
    TimeTick,
    /// The wall clock was adjusted (manually or by the system).
    TimeChanged,
    /// The active time zone changed; payload is the new zone id.
    TimezoneChanged(String),
}

impl ClockEvent {
    #[inline]
    pub fn kind(&self) -> ClockEventKind {
        match self {
            ClockEvent::TimeTick => ClockEventKind::TimeTick,
            ClockEvent::TimeChanged => ClockEventKind::TimeChanged,
            ClockEvent::TimezoneChanged(_) => ClockEventKind::TimezoneChanged,
        }
    }
}

/// Event kind, used by subscription filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockEventKind {
    TimeTick,
    TimeChanged,
    TimezoneChanged,
}

impl ClockEventKind {
    /// All event kinds, in delivery-relevance order.
    pub const ALL: [ClockEventKind; 3] = [
        ClockEventKind::TimeTick,
        ClockEventKind::TimeChanged,
        ClockEventKind::TimezoneChanged,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind() {
        assert_eq!(ClockEvent::TimeTick.kind(), ClockEventKind::TimeTick);
        assert_eq!(ClockEvent::TimeChanged.kind(), ClockEventKind::TimeChanged);
        assert_eq!(
            ClockEvent::TimezoneChanged("UTC+9".to_string()).kind(),
            ClockEventKind::TimezoneChanged
        );
    }

    #[test]
    fn test_all_kinds_distinct() {
        let kinds = ClockEventKind::ALL;
        assert_eq!(kinds.len(), 3);
        assert_ne!(kinds[0], kinds[1]);
        assert_ne!(kinds[1], kinds[2]);
    }
}
