use std::future::Future;

use crate::problem::data_model::SolverDataModel;

use super::routing_assignment::RoutingAssignment;

/// External engine that searches routes for a data model.
///
/// The call is treated as one blocking step: implementations own their
/// internal concurrency. `Ok(None)` means no feasible assignment was found.
/// No timeout is applied here, callers that need one wrap the adapter.
pub trait SolverAdapter {
    type Assignment: RoutingAssignment;
    type Error: std::error::Error + Send + Sync + 'static;

    fn solve(
        &self,
        model: &SolverDataModel,
    ) -> impl Future<Output = Result<Option<Self::Assignment>, Self::Error>> + Send;
}
