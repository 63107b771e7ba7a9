use tracing::{info, instrument};

use crate::{
    error::PipelineError,
    problem::data_model_builder::DataModelBuilder,
    report::{Report, extractor::extract},
    timer_debug,
};

use super::solver_adapter::SolverAdapter;

/// Builds the data model, hands it to `solver` and extracts the report.
///
/// The three steps run strictly in sequence and nothing is kept between calls.
#[instrument(skip_all, level = "debug")]
pub async fn run<S>(solver: &S, builder: DataModelBuilder) -> Result<Report, PipelineError>
where
    S: SolverAdapter,
{
    let model = builder.build()?;

    let assignment = timer_debug!("Solver", solver.solve(&model).await)
        .map_err(|error| PipelineError::Solver(Box::new(error)))?;

    if assignment.is_none() {
        info!("Solver returned no solution");
    }

    let report = extract(assignment.as_ref(), &model)?;

    info!(
        dropped = report.dropped_locations.len(),
        vehicles = report.summaries.len(),
        distance = report.totals.distance,
        "Extracted report"
    );

    Ok(report)
}
