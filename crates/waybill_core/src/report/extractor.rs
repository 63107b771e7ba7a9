use tracing::{debug, instrument};

use crate::{
    error::ExtractError,
    problem::{data_model::SolverDataModel, location::LocationIdx, vehicle::VehicleIdx},
    solver::routing_assignment::{
        CAPACITY_DIMENSION, CumulValue, RoutingAssignment, RoutingIdx, TIME_DIMENSION,
    },
};

use super::{Dropped, Itinerary, Report, Summary, Totals, formatter};

/// Walks a solved assignment and builds the report.
///
/// `assignment` is `None` when the solver found no feasible solution, which
/// fails with [`ExtractError::NoSolution`]. Location and vehicle names as well
/// as the epoch are taken from `model`.
#[instrument(skip_all, level = "debug")]
pub fn extract<A>(assignment: Option<&A>, model: &SolverDataModel) -> Result<Report, ExtractError>
where
    A: RoutingAssignment + ?Sized,
{
    let assignment = assignment.ok_or(ExtractError::NoSolution)?;

    if assignment.num_vehicles() != model.num_vehicles() {
        return Err(ExtractError::VehicleCountMismatch {
            expected: model.num_vehicles(),
            actual: assignment.num_vehicles(),
        });
    }

    let dropped_locations = dropped_locations(assignment, model)?;

    let mut itineraries = Vec::new();
    let mut summaries = Vec::with_capacity(model.num_vehicles());

    for vehicle in model.vehicles() {
        let summary = walk_route(assignment, model, vehicle, &mut itineraries)?;
        debug!(
            vehicle = %summary.vehicle_name,
            load = summary.load,
            distance = summary.distance,
            time = summary.time,
            visits = summary.number_of_visits,
            "Route extracted"
        );
        summaries.push(summary);
    }

    let totals = Totals::from_summaries(&summaries)?;

    Ok(formatter::assemble(
        dropped_locations,
        itineraries,
        summaries,
        totals,
    ))
}

/// Indices other than starts and ends whose successor is themselves.
fn dropped_locations<A>(
    assignment: &A,
    model: &SolverDataModel,
) -> Result<Vec<Dropped>, ExtractError>
where
    A: RoutingAssignment + ?Sized,
{
    let mut dropped = Vec::new();

    for index in RoutingIdx::all(assignment.size()) {
        if assignment.is_start(index) || assignment.is_end(index) {
            continue;
        }

        if assignment.next(index) == index {
            let location_name = location_name(assignment, model, index)?;
            dropped.push(Dropped {
                location_name: location_name.to_owned(),
            });
        }
    }

    Ok(dropped)
}

/// Appends one itinerary per move of `vehicle` and returns its summary.
///
/// The walk is bounded to `num_locations + 1` moves, a route still running
/// after that is cyclic.
fn walk_route<A>(
    assignment: &A,
    model: &SolverDataModel,
    vehicle: VehicleIdx,
    itineraries: &mut Vec<Itinerary>,
) -> Result<Summary, ExtractError>
where
    A: RoutingAssignment + ?Sized,
{
    let epoch = model.epoch();
    let vehicle_name = model.vehicle_name(vehicle);
    let max_steps = model.num_locations() + 1;

    let mut index = assignment.start(vehicle);
    let mut route_distance: i64 = 0;
    let mut number_of_visits = 0;

    while !assignment.is_end(index) {
        if number_of_visits == max_steps {
            return Err(ExtractError::MalformedAssignment {
                vehicle: vehicle_name.to_owned(),
                steps: max_steps,
            });
        }

        let load = cumul(assignment, CAPACITY_DIMENSION, index)?.value();
        let time = cumul(assignment, TIME_DIMENSION, index)?;

        let previous_index = index;
        index = assignment.next(index);

        let distance = assignment.arc_cost_for_vehicle(previous_index, index, vehicle);
        route_distance = route_distance
            .checked_add(distance)
            .ok_or_else(|| ExtractError::Overflow {
                quantity: "route distance",
                vehicle: vehicle_name.to_owned(),
            })?;

        itineraries.push(Itinerary {
            vehicle_name: vehicle_name.to_owned(),
            load,
            distance,
            from: epoch.after_minutes(time.min)?,
            to: epoch.after_minutes(time.max)?,
        });
        number_of_visits += 1;
    }

    let load = cumul(assignment, CAPACITY_DIMENSION, index)?.value();
    let time = cumul(assignment, TIME_DIMENSION, index)?.min;

    Ok(Summary {
        vehicle_name: vehicle_name.to_owned(),
        load,
        distance: route_distance,
        time,
        number_of_visits,
    })
}

fn cumul<A>(
    assignment: &A,
    dimension: &'static str,
    index: RoutingIdx,
) -> Result<CumulValue, ExtractError>
where
    A: RoutingAssignment + ?Sized,
{
    assignment
        .cumul(dimension, index)
        .ok_or(ExtractError::MissingDimension(dimension))
}

fn location_name<'a, A>(
    assignment: &A,
    model: &'a SolverDataModel,
    index: RoutingIdx,
) -> Result<&'a str, ExtractError>
where
    A: RoutingAssignment + ?Sized,
{
    let location: LocationIdx = assignment.index_to_node(index);

    model
        .location_name(location)
        .ok_or(ExtractError::UnknownLocation {
            index: index.get(),
            location: location.get(),
        })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::{
        config::BuildParams,
        problem::{data_model_builder::DataModelBuilder, distance_edge::DistanceEdge},
        solver::{
            recorded_assignment::{RecordedAssignment, RecordedSolution},
            routing_index_manager::RoutingIndexManager,
        },
        test_utils::{
            MockAssignment, create_location, create_vehicle, depot_two_stops_builder,
            solve_with_routes,
        },
    };

    use super::*;

    fn ts(iso: &str) -> Timestamp {
        iso.parse().unwrap()
    }

    fn l(i: usize) -> LocationIdx {
        LocationIdx::new(i)
    }

    #[test]
    fn test_no_solution() {
        let model = depot_two_stops_builder().build().unwrap();

        let result = extract::<RecordedAssignment>(None, &model);

        assert!(matches!(result, Err(ExtractError::NoSolution)));
    }

    #[test]
    fn test_self_looped_location_is_dropped() {
        let model = depot_two_stops_builder().build().unwrap();
        // Only location 2 is served, location 1 loops onto itself.
        let assignment = solve_with_routes(&model, &[vec![l(2)]]);

        let report = extract(Some(&assignment), &model).unwrap();

        assert_eq!(
            report.dropped_locations,
            vec![Dropped {
                location_name: String::from("stop_1")
            }]
        );
        assert_eq!(report.itineraries.len(), 2);
        assert_eq!(report.summaries[0].number_of_visits, 2);
    }

    #[test]
    fn test_full_route() {
        let model = depot_two_stops_builder().build().unwrap();
        let assignment = solve_with_routes(&model, &[vec![l(1), l(2)]]);

        let report = extract(Some(&assignment), &model).unwrap();

        assert!(report.dropped_locations.is_empty());

        // depot -> stop_1 (placeholder), stop_1 -> stop_2 (edge), stop_2 -> depot (placeholder)
        let distances: Vec<i64> = report.itineraries.iter().map(|i| i.distance).collect();
        assert_eq!(distances, vec![1000, 10, 1000]);

        // Loads observed before each move.
        let loads: Vec<i64> = report.itineraries.iter().map(|i| i.load).collect();
        assert_eq!(loads, vec![0, 3, 7]);

        assert_eq!(report.itineraries[0].vehicle_name, "van");
        assert_eq!(report.itineraries[0].from, ts("2025-06-10T08:00:00Z"));
        assert_eq!(report.itineraries[0].to, ts("2025-06-10T18:00:00Z"));
        // Arrival at stop_1 is 5 minutes of service plus 1000 minutes of travel,
        // past its closing time so the range collapses onto the arrival.
        assert_eq!(report.itineraries[1].from, ts("2025-06-11T00:45:00Z"));
        assert_eq!(report.itineraries[1].to, ts("2025-06-11T00:45:00Z"));
        assert!(
            report
                .itineraries
                .iter()
                .all(|itinerary| itinerary.from <= itinerary.to)
        );

        let summary = &report.summaries[0];
        assert_eq!(summary.vehicle_name, "van");
        assert_eq!(summary.load, 7);
        assert_eq!(summary.distance, 2010);
        assert_eq!(summary.number_of_visits, 3);
        assert_eq!(summary.time, 2020);

        assert_eq!(report.totals.load, 7);
        assert_eq!(report.totals.distance, 2010);
        assert_eq!(report.totals.time, summary.time);
    }

    #[test]
    fn test_totals_match_summaries() {
        let mut builder = DataModelBuilder::default();
        builder
            .add_location(create_location("depot", "2025-06-10T08:00:00Z", "2025-06-10T20:00:00Z", 0))
            .add_location(create_location("a", "2025-06-10T08:00:00Z", "2025-06-10T20:00:00Z", 2))
            .add_location(create_location("b", "2025-06-10T08:00:00Z", "2025-06-10T20:00:00Z", 4))
            .add_location(create_location("c", "2025-06-10T08:00:00Z", "2025-06-10T20:00:00Z", 1))
            .add_location(create_location("d", "2025-06-10T08:00:00Z", "2025-06-10T20:00:00Z", 5))
            .add_vehicle(create_vehicle("first", 10, 0, 0))
            .add_vehicle(create_vehicle("second", 10, 0, 0))
            .add_vehicle(create_vehicle("idle", 10, 0, 0))
            .add_edge(DistanceEdge::new(1, 2, 12, 6))
            .add_edge(DistanceEdge::new(1, 3, 30, 20))
            .add_edge(DistanceEdge::new(3, 1, 31, 21));
        let model = builder.build().unwrap();

        let assignment = solve_with_routes(&model, &[vec![l(1), l(2)], vec![l(4)]]);
        let report = extract(Some(&assignment), &model).unwrap();

        assert_eq!(report.summaries.len(), 3);
        assert_eq!(
            report.dropped_locations,
            vec![Dropped {
                location_name: String::from("c")
            }]
        );
        assert_eq!(
            report.totals.load,
            report.summaries.iter().map(|s| s.load).sum::<i64>()
        );
        assert_eq!(
            report.totals.distance,
            report.summaries.iter().map(|s| s.distance).sum::<i64>()
        );
        assert_eq!(
            report.totals.time,
            report.summaries.iter().map(|s| s.time).sum::<i64>()
        );

        // The idle vehicle goes straight from its start to its end.
        let idle = &report.summaries[2];
        assert_eq!(idle.number_of_visits, 1);
        assert_eq!(idle.distance, 0);
        assert_eq!(idle.load, 0);

        // Itineraries are grouped per vehicle, in vehicle order.
        let names: Vec<&str> = report
            .itineraries
            .iter()
            .map(|i| i.vehicle_name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "first", "first", "second", "second", "idle"]);
    }

    #[test]
    fn test_dropped_never_in_itinerary() {
        let model = depot_two_stops_builder().build().unwrap();
        let manager = RoutingIndexManager::new(&model);
        let assignment = solve_with_routes(&model, &[vec![l(1)]]);

        let report = extract(Some(&assignment), &model).unwrap();

        assert_eq!(report.dropped_locations.len(), 1);
        assert_eq!(report.dropped_locations[0].location_name, "stop_2");

        let dropped_index = manager.node_to_index(l(2)).unwrap();
        let mut index = assignment.start(VehicleIdx::new(0));
        while !assignment.is_end(index) {
            assert_ne!(index, dropped_index);
            index = assignment.next(index);
        }
    }

    #[test]
    fn test_route_distance_overflow() {
        let mut builder = depot_two_stops_builder();
        let mut params = BuildParams::default();
        params.placeholder.distance = i64::MAX / 2 + 1;
        builder.set_params(params);
        let model = builder.build().unwrap();
        // depot -> stop_1 and stop_2 -> depot both cost the placeholder.
        let assignment = solve_with_routes(&model, &[vec![l(1), l(2)]]);

        let error = extract(Some(&assignment), &model).unwrap_err();

        assert!(matches!(
            error,
            ExtractError::Overflow { quantity: "route distance", ref vehicle } if vehicle == "van"
        ));
    }

    #[test]
    fn test_cyclic_route_is_malformed() {
        let model = depot_two_stops_builder().build().unwrap();
        let manager = RoutingIndexManager::new(&model);
        let mut solution = RecordedSolution::from_routes(&manager, &[vec![l(1), l(2)]])
            .with_dimension(CAPACITY_DIMENSION, vec![CumulValue::fixed(0); 4])
            .with_dimension(TIME_DIMENSION, vec![CumulValue::new(0, 10); 4]);
        // stop_2 goes back to stop_1 instead of the end.
        solution.next[1] = Some(RoutingIdx::new(0));
        let assignment = RecordedAssignment::new(solution, &model).unwrap();

        let error = extract(Some(&assignment), &model).unwrap_err();

        assert!(matches!(
            error,
            ExtractError::MalformedAssignment { ref vehicle, steps: 4 } if vehicle == "van"
        ));
    }

    #[test]
    fn test_missing_dimension() {
        let model = depot_two_stops_builder().build().unwrap();
        let manager = RoutingIndexManager::new(&model);
        let solution = RecordedSolution::unassigned(&manager)
            .with_dimension(CAPACITY_DIMENSION, vec![CumulValue::fixed(0); 4]);
        let assignment = RecordedAssignment::new(solution, &model).unwrap();

        let error = extract(Some(&assignment), &model).unwrap_err();

        assert!(matches!(error, ExtractError::MissingDimension("Time")));
    }

    #[test]
    fn test_vehicle_count_mismatch() {
        let model = depot_two_stops_builder().build().unwrap();
        let assignment = MockAssignment::default();

        let error = extract(Some(&assignment), &model).unwrap_err();

        assert!(matches!(
            error,
            ExtractError::VehicleCountMismatch {
                expected: 1,
                actual: 0
            }
        ));
    }

    #[test]
    fn test_unknown_location() {
        let model = depot_two_stops_builder().build().unwrap();
        let assignment = MockAssignment {
            num_vehicles: 1,
            nodes: vec![7, 0, 0],
            next: vec![0, 2, 2],
            starts: vec![1],
            ends: vec![2],
        };

        let error = extract(Some(&assignment), &model).unwrap_err();

        assert!(matches!(
            error,
            ExtractError::UnknownLocation {
                index: 0,
                location: 7
            }
        ));
    }

    #[test]
    fn test_trait_object_assignment() {
        let model = depot_two_stops_builder().build().unwrap();
        let assignment = solve_with_routes(&model, &[vec![l(1), l(2)]]);
        let assignment: &dyn RoutingAssignment = &assignment;

        let report = extract(Some(assignment), &model).unwrap();

        assert_eq!(report.summaries[0].number_of_visits, 3);
    }
}
