//! Time-zone id resolution
//!
//! Zone ids arrive as opaque strings in the zone-change event. Resolution
//! is total: IANA names go through the tz database, "UTC+9"/"GMT-05:30"
//! style ids are parsed as fixed offsets, and anything unrecognized falls
//! back to UTC. There is no error path; an unrecognized id is a fallback,
//! not a failure.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use chrono_tz::Tz;

/// A resolved time zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ZoneId {
    Utc,
    /// Fixed offset east of UTC ("UTC+9", "GMT-05:30").
    Fixed(FixedOffset),
    /// IANA zone ("Asia/Tokyo"), DST rules included.
    Named(Tz),
}

impl Default for ZoneId {
    fn default() -> Self {
        ZoneId::Utc
    }
}

impl ZoneId {
    /// Resolve a zone id string. Never fails.
    pub fn resolve(id: &str) -> Self {
        let id = id.trim();
        match id {
            "" => return ZoneId::Utc,
            "UTC" | "GMT" | "Z" | "Etc/UTC" | "Etc/GMT" => return ZoneId::Utc,
            _ => {}
        }
        if let Some(offset) = parse_fixed_offset(id) {
            return ZoneId::Fixed(offset);
        }
        if let Ok(tz) = Tz::from_str(id) {
            return ZoneId::Named(tz);
        }
        tracing::warn!(zone = id, "unrecognized time zone id, falling back to UTC");
        ZoneId::Utc
    }

    /// Zone-local `(hour, minute)` for an epoch timestamp in milliseconds.
    /// Hour is 0-23, minute 0-59.
    pub fn local_hour_minute(&self, epoch_millis: i64) -> (u32, u32) {
        // Out-of-range timestamps collapse to the epoch; the face only
        // ever feeds this a current wall-clock reading.
        let utc = DateTime::<Utc>::from_timestamp_millis(epoch_millis).unwrap_or_default();
        match self {
            ZoneId::Utc => (utc.hour(), utc.minute()),
            ZoneId::Fixed(offset) => {
                let local = utc.with_timezone(offset);
                (local.hour(), local.minute())
            }
            ZoneId::Named(tz) => {
                let local = utc.with_timezone(tz);
                (local.hour(), local.minute())
            }
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Utc => write!(f, "UTC"),
            ZoneId::Fixed(offset) => write!(f, "UTC{}", offset),
            ZoneId::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Parse "UTC"/"GMT" prefixed fixed-offset ids: `UTC+9`, `GMT-05:30`,
/// `UTC+0930`. Hours up to 18, matching the widest real offset range.
fn parse_fixed_offset(id: &str) -> Option<FixedOffset> {
    let rest = id.strip_prefix("UTC").or_else(|| id.strip_prefix("GMT"))?;
    let (sign, digits) = match rest.as_bytes().first()? {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        Some(_) => return None,
        None => match digits.len() {
            1 | 2 => (digits.parse::<i32>().ok()?, 0),
            4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
            _ => return None,
        },
    };
    if !(0..=18).contains(&hours) || !(0..=59).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
