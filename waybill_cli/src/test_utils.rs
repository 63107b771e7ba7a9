use waybill_core::problem::{
    data_model::SolverDataModel, data_model_builder::DataModelBuilder, location::Location,
    location::LocationIdx, time_window::TimeWindow, vehicle::Vehicle,
};

/// One depot open 08:00 to 18:00 and one vehicle based there.
pub fn single_depot_model() -> SolverDataModel {
    let mut builder = DataModelBuilder::default();
    builder
        .add_location(Location::new(
            String::from("depot"),
            TimeWindow::from_iso("2025-06-10T08:00:00Z", "2025-06-10T18:00:00Z").unwrap(),
            0,
            0,
        ))
        .add_vehicle(Vehicle::new(
            String::from("van"),
            10,
            LocationIdx::new(0),
            LocationIdx::new(0),
        ));
    builder.build().unwrap()
}
