use schemars::schema_for;

use crate::{json::data_model::JsonDataModel, json::types, report::Report};

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonRoutingRequest))
}

pub fn generate_data_model_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(JsonDataModel))
}

pub fn generate_report_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(Report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_schema() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_json_schema().unwrap()).unwrap();

        assert_eq!(schema["title"], "RoutingRequest");
        assert!(schema["properties"]["locations"].is_object());
        assert!(schema["properties"]["distances"].is_object());
    }

    #[test]
    fn test_report_schema() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_report_schema().unwrap()).unwrap();

        assert_eq!(schema["title"], "Report");
        assert!(schema["properties"]["droppedLocations"].is_object());
    }

    #[test]
    fn test_data_model_schema() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_data_model_schema().unwrap()).unwrap();

        assert!(schema["properties"]["DistanceMatrix"].is_object());
    }
}
