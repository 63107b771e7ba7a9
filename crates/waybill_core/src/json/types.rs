use std::{fs::File, io::BufReader, path::Path};

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{
    data_model_builder::DataModelBuilder,
    distance_edge::DistanceEdge,
    location::{Location, LocationIdx},
    time_window::TimeWindow,
    vehicle::Vehicle,
};

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "RoutingRequest")]
pub struct JsonRoutingRequest {
    pub locations: Vec<JsonLocation>,
    pub vehicles: Vec<JsonVehicle>,

    /// Undirected travel records, pairs without a record get the placeholder cost.
    #[serde(default)]
    pub distances: Vec<JsonDistanceEdge>,
}

#[derive(Serialize, Deserialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields, rename = "Location")]
pub struct JsonLocation {
    pub name: String,
    pub from: Timestamp,
    pub to: Timestamp,
    pub demand: i64,

    /// Service duration in minutes.
    pub service: i64,
}

impl From<&Location> for JsonLocation {
    fn from(value: &Location) -> Self {
        JsonLocation {
            name: value.name().to_owned(),
            from: value.time_window().from(),
            to: value.time_window().to(),
            demand: value.demand(),
            service: value.service_minutes(),
        }
    }
}

impl From<JsonLocation> for Location {
    fn from(value: JsonLocation) -> Self {
        Location::new(
            value.name,
            TimeWindow::new(value.from, value.to),
            value.demand,
            value.service,
        )
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields, rename = "Vehicle")]
pub struct JsonVehicle {
    pub name: String,
    pub capacity: i64,

    /// 0-based location index.
    pub start: usize,

    /// 0-based location index.
    pub end: usize,
}

impl From<&Vehicle> for JsonVehicle {
    fn from(value: &Vehicle) -> Self {
        JsonVehicle {
            name: value.name().to_owned(),
            capacity: value.capacity(),
            start: value.start().get(),
            end: value.end().get(),
        }
    }
}

impl From<JsonVehicle> for Vehicle {
    fn from(value: JsonVehicle) -> Self {
        Vehicle::new(
            value.name,
            value.capacity,
            LocationIdx::new(value.start),
            LocationIdx::new(value.end),
        )
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Clone, Copy)]
#[serde(deny_unknown_fields, rename = "DistanceEdge")]
pub struct JsonDistanceEdge {
    /// 1-based location index.
    pub from: usize,

    /// 1-based location index.
    pub to: usize,

    pub distance: i64,

    /// Minutes.
    pub duration: i64,
}

impl From<JsonDistanceEdge> for DistanceEdge {
    fn from(value: JsonDistanceEdge) -> Self {
        DistanceEdge::new(value.from, value.to, value.distance, value.duration)
    }
}

impl JsonRoutingRequest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let file = File::open(path)?;
        let request = serde_json::from_reader(BufReader::new(file))?;
        Ok(request)
    }

    /// Converts the records into a builder. Build parameters keep their defaults.
    pub fn into_builder(self) -> DataModelBuilder {
        let mut builder = DataModelBuilder::default();

        builder
            .set_locations(self.locations.into_iter().map(Location::from).collect())
            .set_vehicles(self.vehicles.into_iter().map(Vehicle::from).collect())
            .set_edges(self.distances.into_iter().map(DistanceEdge::from).collect());

        builder
    }
}
