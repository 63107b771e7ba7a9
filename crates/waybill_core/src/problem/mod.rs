pub mod data_model;
pub mod data_model_builder;
pub mod distance_edge;
pub mod epoch;
pub mod location;
pub mod time_window;
pub mod travel_matrices;
pub mod vehicle;
