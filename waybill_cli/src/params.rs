use std::path::PathBuf;

use clap::Args;
use jiff::tz::TimeZone;
use waybill_core::{
    config::{BuildParams, parse_time_zone},
    json::types::JsonRoutingRequest,
    problem::data_model_builder::DataModelBuilder,
};

/// Request file and overrides applied on top of the `WAYBILL_*` environment.
#[derive(Args)]
pub struct RequestArgs {
    /// Routing request file
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Distance for location pairs without an edge
    #[arg(long)]
    pub placeholder_distance: Option<i64>,

    /// Duration in minutes for location pairs without an edge
    #[arg(long)]
    pub placeholder_duration: Option<i64>,

    /// Time zone used to read the start of the planning window (e.g. "Europe/Brussels")
    #[arg(long, value_parser = parse_time_zone)]
    pub time_zone: Option<TimeZone>,
}

impl RequestArgs {
    pub fn params(&self) -> Result<BuildParams, anyhow::Error> {
        let mut params = BuildParams::from_env()?;

        if let Some(distance) = self.placeholder_distance {
            params.placeholder.distance = distance;
        }

        if let Some(duration) = self.placeholder_duration {
            params.placeholder.duration = duration;
        }

        if let Some(time_zone) = &self.time_zone {
            params.time_zone = time_zone.clone();
        }

        Ok(params)
    }

    pub fn load_builder(&self) -> Result<DataModelBuilder, anyhow::Error> {
        let request = JsonRoutingRequest::from_file(&self.input)?;
        let mut builder = request.into_builder();
        builder.set_params(self.params()?);

        Ok(builder)
    }
}
