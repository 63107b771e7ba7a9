pub mod extractor;
pub mod formatter;

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Location the solver left unvisited.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dropped {
    pub location_name: String,
}

/// One move of a vehicle, with the load and time range observed before it.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub vehicle_name: String,
    pub load: i64,
    pub distance: i64,
    pub from: Timestamp,
    pub to: Timestamp,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub vehicle_name: String,
    pub load: i64,
    pub distance: i64,
    /// Minutes from the epoch at which the vehicle completes its route.
    pub time: i64,
    pub number_of_visits: usize,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of every vehicle's final load, not the total demand served.
    pub load: i64,
    pub distance: i64,
    pub time: i64,
}

impl Totals {
    /// Sums the summaries, failing on the first vehicle that overflows a total.
    pub fn from_summaries(summaries: &[Summary]) -> Result<Self, ExtractError> {
        summaries
            .iter()
            .try_fold(Totals::default(), |totals, summary| {
                let add = |quantity, total: i64, value| {
                    total.checked_add(value).ok_or_else(|| ExtractError::Overflow {
                        quantity,
                        vehicle: summary.vehicle_name.clone(),
                    })
                };

                Ok(Totals {
                    load: add("total load", totals.load, summary.load)?,
                    distance: add("total distance", totals.distance, summary.distance)?,
                    time: add("total time", totals.time, summary.time)?,
                })
            })
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", rename = "Report")]
pub struct Report {
    pub dropped_locations: Vec<Dropped>,
    pub itineraries: Vec<Itinerary>,
    pub summaries: Vec<Summary>,
    pub totals: Totals,
}
