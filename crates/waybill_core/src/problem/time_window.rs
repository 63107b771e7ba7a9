use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Absolute opening and closing instants of a location.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
pub struct TimeWindow {
    from: Timestamp,
    to: Timestamp,
}

impl TimeWindow {
    pub fn new(from: Timestamp, to: Timestamp) -> Self {
        TimeWindow { from, to }
    }

    pub fn from_iso(from: &str, to: &str) -> Result<Self, jiff::Error> {
        Ok(TimeWindow {
            from: from.parse()?,
            to: to.parse()?,
        })
    }

    pub fn from(&self) -> Timestamp {
        self.from
    }

    pub fn to(&self) -> Timestamp {
        self.to
    }

    pub fn is_negative(&self) -> bool {
        self.to < self.from
    }
}
