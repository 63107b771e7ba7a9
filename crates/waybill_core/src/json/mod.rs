pub mod data_model;
pub mod schema;
pub mod types;
