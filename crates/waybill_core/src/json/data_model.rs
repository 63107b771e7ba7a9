use jiff::Timestamp;
use schemars::JsonSchema;
use serde::Serialize;

use crate::problem::data_model::SolverDataModel;

/// Data model in the shape handed to an external solver.
#[derive(Serialize, JsonSchema, Debug)]
#[serde(rename_all = "PascalCase", rename = "DataModel")]
pub struct JsonDataModel {
    pub distance_matrix: Vec<Vec<i64>>,
    pub time_matrix: Vec<Vec<i64>>,

    /// `[lower, upper]` in minutes relative to `Epoch`.
    pub time_windows: Vec<[i64; 2]>,
    pub demands: Vec<i64>,
    pub service_times: Vec<i64>,
    pub vehicle_capacities: Vec<i64>,
    pub vehicle_number: usize,
    pub starts: Vec<usize>,
    pub ends: Vec<usize>,
    pub epoch: Timestamp,
    pub location_names: Vec<String>,
    pub vehicle_names: Vec<String>,
}

impl From<&SolverDataModel> for JsonDataModel {
    fn from(model: &SolverDataModel) -> Self {
        JsonDataModel {
            distance_matrix: model.matrices().distance_rows(),
            time_matrix: model.matrices().time_rows(),
            time_windows: model.time_windows().to_vec(),
            demands: model.demands().to_vec(),
            service_times: model.service_times().to_vec(),
            vehicle_capacities: model.vehicle_capacities().to_vec(),
            vehicle_number: model.num_vehicles(),
            starts: model.starts().iter().map(|start| start.get()).collect(),
            ends: model.ends().iter().map(|end| end.get()).collect(),
            epoch: model.epoch().timestamp(),
            location_names: model.location_names().to_vec(),
            vehicle_names: model.vehicle_names().to_vec(),
        }
    }
}
