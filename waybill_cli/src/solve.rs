use std::{path::PathBuf, time::Duration};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use waybill_core::solver::pipeline;

use crate::{
    params::RequestArgs, parsers, process_solver::ProcessSolver, render,
    timeout_solver::TimeoutSolver,
};

#[derive(Args)]
pub struct SolveArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Solver program, it reads the data model on stdin and answers on stdout
    #[arg(long)]
    solver: String,

    /// Argument passed to the solver program, repeatable
    #[arg(long = "arg", allow_hyphen_values = true)]
    solver_args: Vec<String>,

    /// Time given to the solver (e.g., "30s", "5m", "PT1H30M")
    #[arg(short, long, value_parser = parsers::parse_timeout, default_value = "30s")]
    timeout: jiff::SignedDuration,

    /// Report file, the report is only printed when omitted
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub async fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    let builder = args.request.load_builder()?;
    let time_zone = args.request.params()?.time_zone;

    info!(solver = %args.solver, timeout = %args.timeout, "Solving {:?}", args.request.input);

    let solver = TimeoutSolver::new(
        ProcessSolver::new(args.solver, args.solver_args),
        args.timeout,
    );

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} ({elapsed})")?);
    spinner.set_message("solving...");

    let result = pipeline::run(&solver, builder).await;
    spinner.finish_and_clear();

    let report = result?;

    render::print_report(&report, &time_zone);
    render::write_report(args.out.as_ref(), &report)
}
