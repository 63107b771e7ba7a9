use super::{
    epoch::Epoch,
    location::LocationIdx,
    travel_matrices::TravelMatrices,
    vehicle::VehicleIdx,
};

/// Solver-ready numeric view of a routing request.
///
/// Every per-location array is indexed by [`LocationIdx`] and every per-vehicle
/// array by [`VehicleIdx`], following the order of the request. Built once by
/// [`DataModelBuilder`](super::data_model_builder::DataModelBuilder) and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct SolverDataModel {
    pub(super) matrices: TravelMatrices,
    pub(super) time_windows: Vec<[i64; 2]>,
    pub(super) demands: Vec<i64>,
    pub(super) service_times: Vec<i64>,
    pub(super) vehicle_capacities: Vec<i64>,
    pub(super) starts: Vec<LocationIdx>,
    pub(super) ends: Vec<LocationIdx>,
    pub(super) location_names: Vec<String>,
    pub(super) vehicle_names: Vec<String>,
    pub(super) epoch: Epoch,
}

impl SolverDataModel {
    pub fn num_locations(&self) -> usize {
        self.location_names.len()
    }

    pub fn num_vehicles(&self) -> usize {
        self.vehicle_names.len()
    }

    pub fn matrices(&self) -> &TravelMatrices {
        &self.matrices
    }

    /// `[lower, upper]` in minutes relative to the epoch.
    pub fn time_windows(&self) -> &[[i64; 2]] {
        &self.time_windows
    }

    pub fn demands(&self) -> &[i64] {
        &self.demands
    }

    pub fn service_times(&self) -> &[i64] {
        &self.service_times
    }

    pub fn vehicle_capacities(&self) -> &[i64] {
        &self.vehicle_capacities
    }

    pub fn starts(&self) -> &[LocationIdx] {
        &self.starts
    }

    pub fn ends(&self) -> &[LocationIdx] {
        &self.ends
    }

    pub fn epoch(&self) -> &Epoch {
        &self.epoch
    }

    pub fn location_names(&self) -> &[String] {
        &self.location_names
    }

    pub fn vehicle_names(&self) -> &[String] {
        &self.vehicle_names
    }

    pub fn location_name(&self, location: LocationIdx) -> Option<&str> {
        self.location_names.get(location.get()).map(String::as_str)
    }

    pub fn vehicle_name(&self, vehicle: VehicleIdx) -> &str {
        &self.vehicle_names[vehicle.get()]
    }

    /// Whether some vehicle starts or ends at `location`.
    pub fn is_depot(&self, location: LocationIdx) -> bool {
        self.starts.contains(&location) || self.ends.contains(&location)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = VehicleIdx> {
        VehicleIdx::all(self.vehicle_names.len())
    }
}
