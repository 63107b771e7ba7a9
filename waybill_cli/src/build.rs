use std::path::PathBuf;

use clap::Args;
use tracing::info;
use waybill_core::json::data_model::JsonDataModel;

use crate::params::RequestArgs;

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Output file, stdout when omitted
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub fn run(args: BuildArgs) -> Result<(), anyhow::Error> {
    let model = args.request.load_builder()?.build()?;

    info!(
        locations = model.num_locations(),
        vehicles = model.num_vehicles(),
        epoch = %model.epoch().timestamp(),
        "Built data model"
    );

    let content = serde_json::to_string_pretty(&JsonDataModel::from(&model))?;
    crate::render::write_output(args.out.as_ref(), &content)
}
