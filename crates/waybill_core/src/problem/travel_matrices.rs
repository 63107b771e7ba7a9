use std::sync::Arc;

use crate::{config::PlaceholderCost, error::InputError};

use super::{distance_edge::DistanceEdge, location::LocationIdx};

pub type Distance = i64;
/// Minutes.
pub type Time = i64;

/// Distance and time between every ordered pair of locations.
///
/// Both matrices use a flat row-major layout: the value for a pair is stored at
/// `from * num_locations + to`. Storage is shared, cloning is cheap.
#[derive(Debug, Clone)]
pub struct TravelMatrices {
    distances: Arc<Vec<Distance>>,
    times: Arc<Vec<Time>>,
    num_locations: usize,
}

fn is_flat_matrix_symmetric(matrix: &[i64], num_locations: usize) -> bool {
    for i in 0..num_locations {
        for j in (i + 1)..num_locations {
            if matrix[i * num_locations + j] != matrix[j * num_locations + i] {
                return false;
            }
        }
    }
    true
}

impl TravelMatrices {
    /// Fills every off-diagonal pair with `placeholder`, then mirrors each edge
    /// onto both directions. Later edges overwrite earlier ones, edges from a
    /// location to itself are ignored.
    pub fn from_edges(
        num_locations: usize,
        edges: &[DistanceEdge],
        placeholder: PlaceholderCost,
    ) -> Result<Self, InputError> {
        let mut distances: Vec<Distance> = vec![0; num_locations * num_locations];
        let mut times: Vec<Time> = vec![0; num_locations * num_locations];

        for i in 0..num_locations {
            for j in 0..num_locations {
                if i != j {
                    distances[i * num_locations + j] = placeholder.distance;
                    times[i * num_locations + j] = placeholder.duration;
                }
            }
        }

        for (position, edge) in edges.iter().enumerate() {
            let from = to_zero_based(edge.from, position, num_locations)?;
            let to = to_zero_based(edge.to, position, num_locations)?;

            // The diagonal stays 0.
            if from == to {
                continue;
            }

            distances[from * num_locations + to] = edge.distance;
            times[from * num_locations + to] = edge.duration;

            distances[to * num_locations + from] = edge.distance;
            times[to * num_locations + from] = edge.duration;
        }

        Ok(TravelMatrices {
            distances: Arc::new(distances),
            times: Arc::new(times),
            num_locations,
        })
    }

    #[inline(always)]
    fn index(&self, from: LocationIdx, to: LocationIdx) -> usize {
        from.get() * self.num_locations + to.get()
    }

    #[inline(always)]
    pub fn travel_distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        self.distances[self.index(from, to)]
    }

    #[inline(always)]
    pub fn travel_time(&self, from: LocationIdx, to: LocationIdx) -> Time {
        self.times[self.index(from, to)]
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    pub fn is_symmetric(&self) -> bool {
        is_flat_matrix_symmetric(&self.distances, self.num_locations)
            && is_flat_matrix_symmetric(&self.times, self.num_locations)
    }

    /// Number of off-diagonal pairs still holding `placeholder`.
    pub fn count_placeholders(&self, placeholder: PlaceholderCost) -> usize {
        (0..self.num_locations)
            .flat_map(|i| (0..self.num_locations).map(move |j| (i, j)))
            .filter(|&(i, j)| {
                i != j
                    && self.distances[i * self.num_locations + j] == placeholder.distance
                    && self.times[i * self.num_locations + j] == placeholder.duration
            })
            .count()
    }

    pub fn distance_rows(&self) -> Vec<Vec<Distance>> {
        to_rows(&self.distances, self.num_locations)
    }

    pub fn time_rows(&self) -> Vec<Vec<Time>> {
        to_rows(&self.times, self.num_locations)
    }
}

fn to_zero_based(location: usize, edge: usize, num_locations: usize) -> Result<usize, InputError> {
    if location == 0 || location > num_locations {
        return Err(InputError::EdgeOutOfRange {
            edge,
            location,
            num_locations,
        });
    }

    Ok(location - 1)
}

fn to_rows(matrix: &[i64], num_locations: usize) -> Vec<Vec<i64>> {
    if num_locations == 0 {
        return Vec::new();
    }

    matrix
        .chunks(num_locations)
        .map(|row| row.to_vec())
        .collect()
}
