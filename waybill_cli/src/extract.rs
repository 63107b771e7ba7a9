use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use waybill_core::solver::{
    pipeline,
    recorded_assignment::{RecordedSolution, RecordedSolver},
};

use crate::{params::RequestArgs, render};

#[derive(Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Recorded solver answer, `null` when the solver found nothing
    #[arg(short, long)]
    solution: PathBuf,

    /// Report file, the report is only printed when omitted
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub async fn run(args: ExtractArgs) -> Result<(), anyhow::Error> {
    let builder = args.request.load_builder()?;
    let time_zone = args.request.params()?.time_zone;

    let file = File::open(&args.solution)?;
    let solution: Option<RecordedSolution> = serde_json::from_reader(BufReader::new(file))?;

    let report = pipeline::run(&RecordedSolver::new(solution), builder).await?;

    render::print_report(&report, &time_zone);
    render::write_report(args.out.as_ref(), &report)
}
