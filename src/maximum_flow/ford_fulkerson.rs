use crate::maximum_flow::augmenting_path::augment_shortest_paths;
use crate::maximum_flow::error::{validate_endpoints, MaxFlowError};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::metrics::{MaxFlowResult, Metrics};
use crate::maximum_flow::residual::ResidualMatrix;
use crate::maximum_flow::solver::{Algorithm, MaxFlowSolver};
use log::debug;
use num_traits::{Bounded, NumAssign};
use std::fmt::Debug;

/// Ford-Fulkerson with breadth-first path search.
///
/// Each augmenting path is a shortest path in the residual network, found by scanning
/// nodes in increasing index order.
#[derive(Debug, Clone)]
pub struct FordFulkerson<Flow> {
    residual: ResidualMatrix<Flow>,
}

impl<Flow> FordFulkerson<Flow>
where
    Flow: NumAssign + Ord + Copy + Bounded + Debug,
{
    pub fn new(graph: &Graph<Flow>) -> Self {
        Self { residual: ResidualMatrix::from_graph(graph) }
    }

    pub fn solve(&mut self, source: usize, sink: usize) -> Result<MaxFlowResult<Flow>, MaxFlowError> {
        validate_endpoints(self.residual.num_nodes(), source, sink)?;

        let mut metrics = Metrics::default();
        let flow = augment_shortest_paths(&mut self.residual, source, sink, &mut metrics);
        debug!(
            "ford-fulkerson {} -> {}: flow {:?}, {} assignments, {} comparisons",
            source, sink, flow, metrics.assignments, metrics.comparisons
        );

        Ok(MaxFlowResult { flow, metrics })
    }

    #[inline]
    pub fn residual(&self) -> &ResidualMatrix<Flow> {
        &self.residual
    }
}

impl<Flow> MaxFlowSolver<Flow> for FordFulkerson<Flow>
where
    Flow: NumAssign + Ord + Copy + Bounded + Debug,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::FordFulkerson
    }

    fn solve(&mut self, source: usize, sink: usize) -> Result<MaxFlowResult<Flow>, MaxFlowError> {
        FordFulkerson::solve(self, source, sink)
    }

    fn residual(&self) -> &ResidualMatrix<Flow> {
        &self.residual
    }
}
