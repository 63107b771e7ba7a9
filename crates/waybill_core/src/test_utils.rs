use std::path::PathBuf;

use crate::{
    problem::{
        data_model::SolverDataModel, data_model_builder::DataModelBuilder,
        distance_edge::DistanceEdge, location::Location, location::LocationIdx,
        time_window::TimeWindow, travel_matrices::Distance, vehicle::Vehicle, vehicle::VehicleIdx,
    },
    solver::{
        recorded_assignment::{RecordedAssignment, RecordedSolution},
        routing_assignment::{
            CAPACITY_DIMENSION, CumulValue, RoutingAssignment, RoutingIdx, TIME_DIMENSION,
        },
        routing_index_manager::RoutingIndexManager,
    },
};

pub fn data_fixture_path(fixture: &str) -> PathBuf {
    let current_working_dir = std::env::current_dir().unwrap();

    current_working_dir
        .join("../../data/fixtures/")
        .join(fixture)
        .canonicalize()
        .unwrap()
}

/// Location with 5 minutes of service.
pub fn create_location(name: &str, from: &str, to: &str, demand: i64) -> Location {
    Location::new(
        name.to_owned(),
        TimeWindow::from_iso(from, to).unwrap(),
        demand,
        5,
    )
}

pub fn create_vehicle(name: &str, capacity: i64, start: usize, end: usize) -> Vehicle {
    Vehicle::new(
        name.to_owned(),
        capacity,
        LocationIdx::new(start),
        LocationIdx::new(end),
    )
}

/// Depot at index 0, two stops and one vehicle starting and ending at the depot.
/// The only edge joins the two stops.
pub fn depot_two_stops_builder() -> DataModelBuilder {
    let mut builder = DataModelBuilder::default();

    builder
        .add_location(create_location(
            "depot",
            "2025-06-10T08:00:00Z",
            "2025-06-10T18:00:00Z",
            0,
        ))
        .add_location(create_location(
            "stop_1",
            "2025-06-10T08:30:00Z",
            "2025-06-10T11:00:00Z",
            3,
        ))
        .add_location(create_location(
            "stop_2",
            "2025-06-10T09:00:00Z",
            "2025-06-10T12:00:00Z",
            4,
        ))
        .add_vehicle(create_vehicle("van", 10, 0, 0))
        .add_edge(DistanceEdge::new(2, 3, 10, 5));

    builder
}

/// Records an assignment that serves `routes` (one location sequence per vehicle).
///
/// Load accumulates demands. Time starts at 0 and adds service and travel time
/// at every move. Each range ends at the location's upper bound, or at the
/// arrival time when that is already later. Unvisited indices get zero ranges.
pub fn solve_with_routes(model: &SolverDataModel, routes: &[Vec<LocationIdx>]) -> RecordedAssignment {
    let manager = RoutingIndexManager::new(model);
    let solution = RecordedSolution::from_routes(&manager, routes);

    let size = manager.size();
    let mut loads = vec![CumulValue::fixed(0); size];
    let mut times = vec![CumulValue::fixed(0); size];

    for &start in manager.starts() {
        let mut index = start;
        let mut node = manager.index_to_node(index);
        let mut load = model.demands()[node.get()];
        let mut time = 0;

        loop {
            loads[index.get()] = CumulValue::fixed(load);
            let upper = model.time_windows()[node.get()][1].max(time);
            times[index.get()] = CumulValue::new(time, upper);

            let Some(next) = solution.next[index.get()] else {
                break;
            };

            let next_node = manager.index_to_node(next);
            load += model.demands()[next_node.get()];
            time += model.service_times()[node.get()]
                + model.matrices().travel_time(node, next_node);

            index = next;
            node = next_node;
        }
    }

    let solution = solution
        .with_dimension(CAPACITY_DIMENSION, loads)
        .with_dimension(TIME_DIMENSION, times);

    RecordedAssignment::new(solution, model).unwrap()
}

/// Hand-written assignment for shapes a recording would reject.
#[derive(Default)]
pub struct MockAssignment {
    pub num_vehicles: usize,
    pub nodes: Vec<usize>,
    pub next: Vec<usize>,
    pub starts: Vec<usize>,
    pub ends: Vec<usize>,
}

impl RoutingAssignment for MockAssignment {
    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    fn start(&self, vehicle: VehicleIdx) -> RoutingIdx {
        RoutingIdx::new(self.starts[vehicle.get()])
    }

    fn is_start(&self, index: RoutingIdx) -> bool {
        self.starts.contains(&index.get())
    }

    fn is_end(&self, index: RoutingIdx) -> bool {
        self.ends.contains(&index.get())
    }

    fn next(&self, index: RoutingIdx) -> RoutingIdx {
        RoutingIdx::new(self.next[index.get()])
    }

    fn index_to_node(&self, index: RoutingIdx) -> LocationIdx {
        LocationIdx::new(self.nodes[index.get()])
    }

    fn cumul(&self, _dimension: &str, _index: RoutingIdx) -> Option<CumulValue> {
        Some(CumulValue::fixed(0))
    }

    fn arc_cost_for_vehicle(
        &self,
        _from: RoutingIdx,
        _to: RoutingIdx,
        _vehicle: VehicleIdx,
    ) -> Distance {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_with_routes_ranges_are_ordered() {
        let model = depot_two_stops_builder().build().unwrap();
        let assignment = solve_with_routes(&model, &[vec![LocationIdx::new(1), LocationIdx::new(2)]]);

        for index in RoutingIdx::all(assignment.size()) {
            let time = assignment.cumul(TIME_DIMENSION, index).unwrap();
            assert!(time.min <= time.max, "{index}: {time:?}");
        }
    }

    #[test]
    fn test_solve_with_routes_cumuls() {
        let model = depot_two_stops_builder().build().unwrap();
        let assignment = solve_with_routes(&model, &[vec![LocationIdx::new(1)]]);

        // start (2) -> stop_1 (0) -> end (3), stop_2 (1) unvisited
        assert_eq!(
            assignment.cumul(CAPACITY_DIMENSION, RoutingIdx::new(0)),
            Some(CumulValue::fixed(3))
        );
        assert_eq!(
            assignment.cumul(TIME_DIMENSION, RoutingIdx::new(0)),
            Some(CumulValue::new(1005, 1005))
        );
        assert_eq!(
            assignment.cumul(TIME_DIMENSION, RoutingIdx::new(3)),
            Some(CumulValue::new(2010, 2010))
        );
        assert_eq!(
            assignment.cumul(CAPACITY_DIMENSION, RoutingIdx::new(1)),
            Some(CumulValue::fixed(0))
        );
    }
}
