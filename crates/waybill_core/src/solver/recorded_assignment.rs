use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::AssignmentError,
    problem::{
        data_model::SolverDataModel, location::LocationIdx, travel_matrices::Distance,
        travel_matrices::TravelMatrices, vehicle::VehicleIdx,
    },
};

use super::{
    routing_assignment::{CumulValue, RoutingAssignment, RoutingIdx},
    routing_index_manager::RoutingIndexManager,
    solver_adapter::SolverAdapter,
};

/// A solver answer captured as plain data, one entry per routing index.
///
/// This is the format external solver processes write back.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RecordedSolution {
    pub index_to_node: Vec<LocationIdx>,
    pub starts: Vec<RoutingIdx>,
    pub ends: Vec<RoutingIdx>,

    /// `null` for vehicle ends.
    pub next: Vec<Option<RoutingIdx>>,

    /// Cumulative values keyed by dimension name.
    pub dimensions: FxHashMap<String, Vec<CumulValue>>,
}

impl RecordedSolution {
    /// Every vehicle goes straight from start to end, every other index is unvisited.
    pub fn unassigned(manager: &RoutingIndexManager) -> Self {
        RecordedSolution::from_routes(manager, &[])
    }

    /// Builds the successor array from one location sequence per vehicle.
    ///
    /// Sequences list the visited non-depot locations, without the start and
    /// end. Vehicles without a sequence drive empty, unlisted locations are
    /// left unvisited.
    pub fn from_routes(manager: &RoutingIndexManager, routes: &[Vec<LocationIdx>]) -> Self {
        let size = manager.size();
        let mut next: Vec<Option<RoutingIdx>> = (0..size).map(|i| Some(RoutingIdx::new(i))).collect();

        for &end in manager.ends() {
            next[end.get()] = None;
        }

        for (vehicle, (&start, &end)) in manager.starts().iter().zip(manager.ends()).enumerate() {
            let mut current = start;
            for index in routes
                .get(vehicle)
                .into_iter()
                .flatten()
                .filter_map(|&node| manager.node_to_index(node))
            {
                next[current.get()] = Some(index);
                current = index;
            }
            next[current.get()] = Some(end);
        }

        RecordedSolution {
            index_to_node: manager.index_to_nodes().to_vec(),
            starts: manager.starts().to_vec(),
            ends: manager.ends().to_vec(),
            next,
            dimensions: FxHashMap::default(),
        }
    }

    pub fn with_dimension(mut self, name: &str, values: Vec<CumulValue>) -> Self {
        self.dimensions.insert(name.to_owned(), values);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexKind {
    Start,
    End,
    Node,
}

/// [`RoutingAssignment`] over a validated [`RecordedSolution`].
///
/// Arc costs come from the model's distance matrix, every vehicle pays the same.
#[derive(Debug, Clone)]
pub struct RecordedAssignment {
    solution: RecordedSolution,
    kinds: Vec<IndexKind>,
    matrices: TravelMatrices,
}

impl RecordedAssignment {
    pub fn new(
        solution: RecordedSolution,
        model: &SolverDataModel,
    ) -> Result<Self, AssignmentError> {
        let size = solution.index_to_node.len();

        check_bounds(
            "indexToNode",
            solution.index_to_node.iter().map(|node| node.get()),
            model.num_locations(),
        )?;

        for (field, indices) in [("starts", &solution.starts), ("ends", &solution.ends)] {
            check_length(field, model.num_vehicles(), indices.len())?;
            check_bounds(field, indices.iter().map(|index| index.get()), size)?;
        }

        check_length("next", size, solution.next.len())?;
        for (name, values) in &solution.dimensions {
            check_length(dimension_field(name), size, values.len())?;
        }

        let mut kinds = vec![IndexKind::Node; size];
        for start in &solution.starts {
            kinds[start.get()] = IndexKind::Start;
        }
        for end in &solution.ends {
            kinds[end.get()] = IndexKind::End;
        }

        for (position, next) in solution.next.iter().enumerate() {
            match next {
                Some(next) if next.get() >= size => {
                    return Err(AssignmentError::IndexOutOfRange {
                        field: "next",
                        position,
                        value: next.get(),
                        bound: size,
                    });
                }
                None if kinds[position] != IndexKind::End => {
                    return Err(AssignmentError::MissingNext { index: position });
                }
                _ => {}
            }
        }

        Ok(RecordedAssignment {
            solution,
            kinds,
            matrices: model.matrices().clone(),
        })
    }
}

fn check_length(field: &'static str, expected: usize, actual: usize) -> Result<(), AssignmentError> {
    if expected != actual {
        return Err(AssignmentError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_bounds(
    field: &'static str,
    values: impl Iterator<Item = usize>,
    bound: usize,
) -> Result<(), AssignmentError> {
    for (position, value) in values.enumerate() {
        if value >= bound {
            return Err(AssignmentError::IndexOutOfRange {
                field,
                position,
                value,
                bound,
            });
        }
    }
    Ok(())
}

fn dimension_field(name: &str) -> &'static str {
    match name {
        super::routing_assignment::CAPACITY_DIMENSION => "dimensions.Capacity",
        super::routing_assignment::TIME_DIMENSION => "dimensions.Time",
        _ => "dimensions",
    }
}

impl RoutingAssignment for RecordedAssignment {
    fn size(&self) -> usize {
        self.solution.index_to_node.len()
    }

    fn num_vehicles(&self) -> usize {
        self.solution.starts.len()
    }

    fn start(&self, vehicle: VehicleIdx) -> RoutingIdx {
        self.solution.starts[vehicle.get()]
    }

    fn is_start(&self, index: RoutingIdx) -> bool {
        self.kinds[index.get()] == IndexKind::Start
    }

    fn is_end(&self, index: RoutingIdx) -> bool {
        self.kinds[index.get()] == IndexKind::End
    }

    fn next(&self, index: RoutingIdx) -> RoutingIdx {
        self.solution.next[index.get()].unwrap_or(index)
    }

    fn index_to_node(&self, index: RoutingIdx) -> LocationIdx {
        self.solution.index_to_node[index]
    }

    fn cumul(&self, dimension: &str, index: RoutingIdx) -> Option<CumulValue> {
        self.solution
            .dimensions
            .get(dimension)
            .and_then(|values| values.get(index.get()))
            .copied()
    }

    fn arc_cost_for_vehicle(
        &self,
        from: RoutingIdx,
        to: RoutingIdx,
        _vehicle: VehicleIdx,
    ) -> Distance {
        if from == to {
            return 0;
        }

        self.matrices
            .travel_distance(self.index_to_node(from), self.index_to_node(to))
    }
}

/// Replays a recorded answer instead of searching. `None` stands for "no solution".
#[derive(Debug, Clone, Default)]
pub struct RecordedSolver {
    solution: Option<RecordedSolution>,
}

impl RecordedSolver {
    pub fn new(solution: Option<RecordedSolution>) -> Self {
        RecordedSolver { solution }
    }
}

impl SolverAdapter for RecordedSolver {
    type Assignment = RecordedAssignment;
    type Error = AssignmentError;

    async fn solve(
        &self,
        model: &SolverDataModel,
    ) -> Result<Option<RecordedAssignment>, AssignmentError> {
        self.solution
            .clone()
            .map(|solution| RecordedAssignment::new(solution, model))
            .transpose()
    }
}
