use jiff::{SignedDuration, Timestamp, tz::TimeZone};

use super::location::Location;

/// Reference instant every minute offset of a request is relative to.
///
/// It is the earliest opening time across all locations. The same value is used
/// to convert time windows into minutes and solved cumulative times back into
/// timestamps.
#[derive(Debug, Clone)]
pub struct Epoch {
    timestamp: Timestamp,
    time_zone: TimeZone,
}

impl Epoch {
    pub fn new(timestamp: Timestamp, time_zone: TimeZone) -> Self {
        Epoch {
            timestamp,
            time_zone,
        }
    }

    /// Returns `None` when there are no locations.
    pub fn earliest(locations: &[Location], time_zone: TimeZone) -> Option<Self> {
        locations
            .iter()
            .map(|location| location.time_window().from())
            .min()
            .map(|timestamp| Epoch::new(timestamp, time_zone))
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// `hour * 60 + minute` of the epoch in its time zone.
    pub fn minutes_of_day(&self) -> i64 {
        let zoned = self.timestamp.to_zoned(self.time_zone.clone());
        i64::from(zoned.hour()) * 60 + i64::from(zoned.minute())
    }

    /// Whole minutes from the epoch to `timestamp`, truncated toward zero.
    pub fn minutes_until(&self, timestamp: Timestamp) -> i64 {
        timestamp.duration_since(self.timestamp).as_mins()
    }

    pub fn after_minutes(&self, minutes: i64) -> Result<Timestamp, jiff::Error> {
        self.timestamp
            .checked_add(SignedDuration::from_secs(minutes.saturating_mul(60)))
    }
}
