use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    index_newtype,
    problem::{location::LocationIdx, travel_matrices::Distance, vehicle::VehicleIdx},
};

index_newtype!(RoutingIdx, indexes LocationIdx);

/// Name of the cumulative load dimension.
pub const CAPACITY_DIMENSION: &str = "Capacity";
/// Name of the cumulative time dimension, in minutes from the epoch.
pub const TIME_DIMENSION: &str = "Time";

/// Solved range of a cumulative variable at one routing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CumulValue {
    pub min: i64,
    pub max: i64,
}

impl CumulValue {
    pub fn new(min: i64, max: i64) -> Self {
        CumulValue { min, max }
    }

    pub fn fixed(value: i64) -> Self {
        CumulValue {
            min: value,
            max: value,
        }
    }

    /// Bound value of the variable. Solved load variables have `min == max`.
    pub fn value(&self) -> i64 {
        self.min
    }
}

/// Read access to a solved routing assignment.
///
/// Routing indices are the solver's node identifiers: every vehicle owns a
/// start and an end index, the other indices map onto locations through
/// [`index_to_node`](RoutingAssignment::index_to_node). Unvisited indices point
/// to themselves through [`next`](RoutingAssignment::next).
pub trait RoutingAssignment {
    /// Number of routing indices, vehicle ends included.
    fn size(&self) -> usize;

    fn num_vehicles(&self) -> usize;

    fn start(&self, vehicle: VehicleIdx) -> RoutingIdx;

    fn is_start(&self, index: RoutingIdx) -> bool;

    fn is_end(&self, index: RoutingIdx) -> bool;

    /// Successor of `index` in its route. Vehicle ends return themselves.
    fn next(&self, index: RoutingIdx) -> RoutingIdx;

    fn index_to_node(&self, index: RoutingIdx) -> LocationIdx;

    /// Looks up a cumulative dimension by name, `None` if it does not exist.
    fn cumul(&self, dimension: &str, index: RoutingIdx) -> Option<CumulValue>;

    fn arc_cost_for_vehicle(&self, from: RoutingIdx, to: RoutingIdx, vehicle: VehicleIdx)
    -> Distance;
}
