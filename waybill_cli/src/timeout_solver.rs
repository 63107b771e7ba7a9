use jiff::SignedDuration;
use tracing::warn;
use waybill_core::{problem::data_model::SolverDataModel, solver::solver_adapter::SolverAdapter};

/// Bounds the wall-clock time of another solver. Running out of time counts as
/// "no solution" and drops the inner search.
pub struct TimeoutSolver<S> {
    inner: S,
    timeout: SignedDuration,
}

impl<S> TimeoutSolver<S> {
    pub fn new(inner: S, timeout: SignedDuration) -> Self {
        TimeoutSolver { inner, timeout }
    }
}

impl<S> SolverAdapter for TimeoutSolver<S>
where
    S: SolverAdapter + Sync,
{
    type Assignment = S::Assignment;
    type Error = S::Error;

    async fn solve(
        &self,
        model: &SolverDataModel,
    ) -> Result<Option<S::Assignment>, S::Error> {
        match tokio::time::timeout(self.timeout.unsigned_abs(), self.inner.solve(model)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout = %self.timeout, "Solver timed out");
                Ok(None)
            }
        }
    }
}
