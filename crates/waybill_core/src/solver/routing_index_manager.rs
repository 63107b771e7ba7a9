use crate::problem::{data_model::SolverDataModel, location::LocationIdx, vehicle::VehicleIdx};

use super::routing_assignment::RoutingIdx;

/// Standard layout of routing indices for a data model.
///
/// Locations that are not a vehicle start or end come first, in location
/// order. They are followed by one start index per vehicle, then one end index
/// per vehicle. Solver adapters are free to use another layout as long as
/// their assignment describes it.
#[derive(Debug, Clone)]
pub struct RoutingIndexManager {
    index_to_node: Vec<LocationIdx>,
    node_to_index: Vec<Option<RoutingIdx>>,
    starts: Vec<RoutingIdx>,
    ends: Vec<RoutingIdx>,
}

impl RoutingIndexManager {
    pub fn new(model: &SolverDataModel) -> Self {
        let num_locations = model.num_locations();
        let num_vehicles = model.num_vehicles();

        let mut index_to_node = Vec::with_capacity(num_locations + 2 * num_vehicles);
        let mut node_to_index = vec![None; num_locations];

        for node in LocationIdx::all(num_locations) {
            if !model.is_depot(node) {
                node_to_index[node.get()] = Some(RoutingIdx::new(index_to_node.len()));
                index_to_node.push(node);
            }
        }

        let mut starts = Vec::with_capacity(num_vehicles);
        for &node in model.starts() {
            starts.push(RoutingIdx::new(index_to_node.len()));
            index_to_node.push(node);
        }

        let mut ends = Vec::with_capacity(num_vehicles);
        for &node in model.ends() {
            ends.push(RoutingIdx::new(index_to_node.len()));
            index_to_node.push(node);
        }

        RoutingIndexManager {
            index_to_node,
            node_to_index,
            starts,
            ends,
        }
    }

    pub fn size(&self) -> usize {
        self.index_to_node.len()
    }

    pub fn index_to_node(&self, index: RoutingIdx) -> LocationIdx {
        self.index_to_node[index]
    }

    /// Routing index of a non-depot location, `None` for vehicle starts and ends.
    pub fn node_to_index(&self, node: LocationIdx) -> Option<RoutingIdx> {
        self.node_to_index.get(node.get()).copied().flatten()
    }

    pub fn start(&self, vehicle: VehicleIdx) -> RoutingIdx {
        self.starts[vehicle.get()]
    }

    pub fn end(&self, vehicle: VehicleIdx) -> RoutingIdx {
        self.ends[vehicle.get()]
    }

    pub fn index_to_nodes(&self) -> &[LocationIdx] {
        &self.index_to_node
    }

    pub fn starts(&self) -> &[RoutingIdx] {
        &self.starts
    }

    pub fn ends(&self) -> &[RoutingIdx] {
        &self.ends
    }
}
