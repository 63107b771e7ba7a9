use serde::Serialize;

use super::travel_matrices::{Distance, Time};

/// Travel record between two locations, referenced with 1-based positions.
///
/// Edges are undirected: the builder writes both `from -> to` and `to -> from`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceEdge {
    pub from: usize,
    pub to: usize,
    pub distance: Distance,
    pub duration: Time,
}

impl DistanceEdge {
    pub fn new(from: usize, to: usize, distance: Distance, duration: Time) -> Self {
        DistanceEdge {
            from,
            to,
            distance,
            duration,
        }
    }
}
