use tracing::{debug, instrument};

use crate::{config::BuildParams, error::InputError};

use super::{
    data_model::SolverDataModel, distance_edge::DistanceEdge, epoch::Epoch, location::Location,
    travel_matrices::TravelMatrices, vehicle::Vehicle,
};

/// Turns location, vehicle and edge records into a [`SolverDataModel`].
#[derive(Default)]
pub struct DataModelBuilder {
    locations: Vec<Location>,
    vehicles: Vec<Vehicle>,
    edges: Vec<DistanceEdge>,
    params: BuildParams,
}

impl DataModelBuilder {
    pub fn set_locations(&mut self, locations: Vec<Location>) -> &mut DataModelBuilder {
        self.locations = locations;
        self
    }

    pub fn add_location(&mut self, location: Location) -> &mut DataModelBuilder {
        self.locations.push(location);
        self
    }

    pub fn set_vehicles(&mut self, vehicles: Vec<Vehicle>) -> &mut DataModelBuilder {
        self.vehicles = vehicles;
        self
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> &mut DataModelBuilder {
        self.vehicles.push(vehicle);
        self
    }

    pub fn set_edges(&mut self, edges: Vec<DistanceEdge>) -> &mut DataModelBuilder {
        self.edges = edges;
        self
    }

    pub fn add_edge(&mut self, edge: DistanceEdge) -> &mut DataModelBuilder {
        self.edges.push(edge);
        self
    }

    pub fn set_params(&mut self, params: BuildParams) -> &mut DataModelBuilder {
        self.params = params;
        self
    }

    #[instrument(skip_all, level = "debug")]
    pub fn build(self) -> Result<SolverDataModel, InputError> {
        let num_locations = self.locations.len();

        let epoch = Epoch::earliest(&self.locations, self.params.time_zone.clone())
            .ok_or(InputError::MissingLocations)?;

        if self.vehicles.is_empty() {
            return Err(InputError::MissingVehicles);
        }

        for vehicle in &self.vehicles {
            for location in [vehicle.start(), vehicle.end()] {
                if location.get() >= num_locations {
                    return Err(InputError::VehicleLocationOutOfRange {
                        vehicle: vehicle.name().to_owned(),
                        location: location.get(),
                        num_locations,
                    });
                }
            }
        }

        let matrices =
            TravelMatrices::from_edges(num_locations, &self.edges, self.params.placeholder)?;

        debug!(
            num_locations,
            num_vehicles = self.vehicles.len(),
            num_edges = self.edges.len(),
            defaulted_pairs = matrices.count_placeholders(self.params.placeholder),
            symmetric = matrices.is_symmetric(),
            "Built travel matrices"
        );

        // Every location shares the epoch's minutes-of-day as lower bound,
        // its own opening time is not used.
        let lower_bound = epoch.minutes_of_day();

        let mut time_windows = Vec::with_capacity(num_locations);
        let mut demands = Vec::with_capacity(num_locations);
        let mut service_times = Vec::with_capacity(num_locations);
        let mut location_names = Vec::with_capacity(num_locations);

        for location in self.locations {
            let window = location.time_window();
            if window.is_negative() {
                return Err(InputError::NegativeTimeWindow {
                    location: location.name().to_owned(),
                    from: window.from(),
                    to: window.to(),
                });
            }

            time_windows.push([lower_bound, epoch.minutes_until(window.to())]);
            demands.push(location.demand());
            service_times.push(location.service_minutes());
            location_names.push(location.name().to_owned());
        }

        let num_vehicles = self.vehicles.len();
        let mut vehicle_capacities = Vec::with_capacity(num_vehicles);
        let mut starts = Vec::with_capacity(num_vehicles);
        let mut ends = Vec::with_capacity(num_vehicles);
        let mut vehicle_names = Vec::with_capacity(num_vehicles);

        for vehicle in self.vehicles {
            vehicle_capacities.push(vehicle.capacity());
            starts.push(vehicle.start());
            ends.push(vehicle.end());
            vehicle_names.push(vehicle.name().to_owned());
        }

        Ok(SolverDataModel {
            matrices,
            time_windows,
            demands,
            service_times,
            vehicle_capacities,
            starts,
            ends,
            location_names,
            vehicle_names,
            epoch,
        })
    }
}
