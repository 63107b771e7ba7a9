use jiff::Timestamp;
use thiserror::Error;

/// Malformed or out-of-range input, reported before any solver runs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No locations given, the time epoch cannot be computed")]
    MissingLocations,

    #[error("No vehicles given")]
    MissingVehicles,

    #[error(
        "Distance edge #{edge} references location {location}, expected a value in [1, {num_locations}]"
    )]
    EdgeOutOfRange {
        edge: usize,
        location: usize,
        num_locations: usize,
    },

    #[error(
        "Vehicle {vehicle} references location {location}, expected a value in [0, {num_locations})"
    )]
    VehicleLocationOutOfRange {
        vehicle: String,
        location: usize,
        num_locations: usize,
    },

    #[error("Location {location} closes before it opens ({from} > {to})")]
    NegativeTimeWindow {
        location: String,
        from: Timestamp,
        to: Timestamp,
    },
}

/// A recorded solver answer whose arrays do not describe a routing assignment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("Field {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Field {field} holds {value} at position {position}, expected a value below {bound}")]
    IndexOutOfRange {
        field: &'static str,
        position: usize,
        value: usize,
        bound: usize,
    },

    #[error("Routing index {index} has no successor but is not a vehicle end")]
    MissingNext { index: usize },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("The solver returned no solution")]
    NoSolution,

    #[error("Route of vehicle {vehicle} did not reach its end within {steps} steps")]
    MalformedAssignment { vehicle: String, steps: usize },

    #[error("The assignment has no cumulative dimension named {0:?}")]
    MissingDimension(&'static str),

    #[error("The assignment routes {actual} vehicles but the model has {expected}")]
    VehicleCountMismatch { expected: usize, actual: usize },

    #[error("Routing index {index} maps to location {location} which is not in the model")]
    UnknownLocation { index: usize, location: usize },

    #[error("The {quantity} of vehicle {vehicle} does not fit in an i64")]
    Overflow {
        quantity: &'static str,
        vehicle: String,
    },

    #[error("Could not convert a cumulative time to a timestamp: {0}")]
    Timestamp(#[from] jiff::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Variable {variable} is not an integer: {value:?}")]
    InvalidNumber {
        variable: &'static str,
        value: String,
    },

    #[error("Unknown time zone {name:?}: {source}")]
    InvalidTimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },
}

/// Failure of one of the three sequential stages of a routing request.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Solver failed: {0}")]
    Solver(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),
}
