use serde::Serialize;

use crate::index_newtype;

use super::time_window::TimeWindow;

index_newtype!(LocationIdx);

/// A stop (or depot) to be visited, identified by its position in the request.
#[derive(Serialize, Debug, Clone)]
pub struct Location {
    name: String,
    time_window: TimeWindow,
    demand: i64,
    service_minutes: i64,
}

impl Location {
    pub fn new(name: String, time_window: TimeWindow, demand: i64, service_minutes: i64) -> Self {
        Location {
            name,
            time_window,
            demand,
            service_minutes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    pub fn demand(&self) -> i64 {
        self.demand
    }

    pub fn service_minutes(&self) -> i64 {
        self.service_minutes
    }
}
