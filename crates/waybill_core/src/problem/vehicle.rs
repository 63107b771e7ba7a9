use serde::Serialize;

use crate::index_newtype;

use super::location::LocationIdx;

index_newtype!(VehicleIdx);

#[derive(Serialize, Debug, Clone)]
pub struct Vehicle {
    name: String,
    capacity: i64,
    start: LocationIdx,
    end: LocationIdx,
}

impl Vehicle {
    pub fn new(name: String, capacity: i64, start: LocationIdx, end: LocationIdx) -> Self {
        Vehicle {
            name,
            capacity,
            start,
            end,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Location the route departs from.
    pub fn start(&self) -> LocationIdx {
        self.start
    }

    /// Location the route returns to.
    pub fn end(&self) -> LocationIdx {
        self.end
    }
}
