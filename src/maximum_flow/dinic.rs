use crate::maximum_flow::csr::CSR;
use crate::maximum_flow::error::{validate_endpoints, MaxFlowError};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::metrics::{MaxFlowResult, Metrics};
use crate::maximum_flow::residual::ResidualMatrix;
use crate::maximum_flow::solver::{Algorithm, MaxFlowSolver};
use log::{debug, trace};
use num_traits::{Bounded, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Dinic's algorithm: blocking flows on successive level graphs.
///
/// Each phase labels nodes with their breadth-first distance from the source, then repeatedly
/// searches the level graph for source-sink paths. A per-node current-arc pointer skips arcs that
/// already led to a dead end, so one phase scans every arc only a bounded number of times.
#[derive(Debug, Clone)]
pub struct Dinic<Flow> {
    residual: ResidualMatrix<Flow>,
    csr: CSR,
    level: Vec<isize>,
    current_edge: Vec<usize>,
}

impl<Flow> Dinic<Flow>
where
    Flow: NumAssign + Ord + Copy + Bounded + Debug,
{
    pub fn new(graph: &Graph<Flow>) -> Self {
        let num_nodes = graph.num_nodes();
        Self { residual: ResidualMatrix::from_graph(graph), csr: CSR::build(graph), level: vec![-1; num_nodes], current_edge: vec![0; num_nodes] }
    }

    pub fn solve(&mut self, source: usize, sink: usize) -> Result<MaxFlowResult<Flow>, MaxFlowError> {
        validate_endpoints(self.csr.num_nodes, source, sink)?;

        let mut metrics = Metrics::default();
        let mut stack = Vec::with_capacity(self.csr.num_nodes);
        let mut flow = Flow::zero();
        metrics.assign(1);

        loop {
            let (reachable, search) = self.update_levels(source, sink);
            metrics += search;
            metrics.compare(1);
            if !reachable {
                break;
            }
            trace!("dinic phase: sink at level {}", self.level[sink]);

            self.current_edge.fill(0);
            metrics.assign(self.csr.num_nodes as u64);

            loop {
                let delta = self.augment(source, sink, &mut stack, &mut metrics);
                metrics.compare(1);
                if delta == Flow::zero() {
                    break;
                }
                flow += delta;
                metrics.assign(1);
            }
        }

        debug!("dinic {} -> {}: flow {:?}, {} assignments, {} comparisons", source, sink, flow, metrics.assignments, metrics.comparisons);
        Ok(MaxFlowResult { flow, metrics })
    }

    #[inline]
    pub fn residual(&self) -> &ResidualMatrix<Flow> {
        &self.residual
    }

    // O(n + m)
    // level[u] is the number of residual edges on a shortest path from source to u, -1 if unreachable
    fn update_levels(&mut self, source: usize, sink: usize) -> (bool, Metrics) {
        let mut metrics = Metrics::default();
        self.level.fill(-1);
        metrics.assign(self.csr.num_nodes as u64);
        self.level[source] = 0;
        let mut que = VecDeque::from([source]);
        metrics.assign(2);

        while let Some(u) = que.pop_front() {
            metrics.compare(1);
            metrics.assign(1);

            for &v in self.csr.neighbors(u) {
                metrics.compare(2);
                if self.level[v] >= 0 {
                    continue;
                }
                metrics.compare(1);
                if self.residual.residual_at(u, v) <= Flow::zero() {
                    continue;
                }

                self.level[v] = self.level[u] + 1;
                que.push_back(v);
                metrics.assign(2);
            }
            metrics.compare(1);
        }
        metrics.compare(1);

        (self.level[sink] >= 0, metrics)
    }

    // Finds one source-sink path in the level graph and pushes its bottleneck along it.
    // Returns zero once the flow in the level graph is blocking.
    fn augment(&mut self, source: usize, sink: usize, stack: &mut Vec<usize>, metrics: &mut Metrics) -> Flow {
        stack.clear();
        stack.push(source);
        metrics.assign(1);

        while let Some(&u) = stack.last() {
            metrics.compare(2);
            if u == sink {
                return self.push_along(stack, metrics);
            }

            match self.advance(u, metrics) {
                Some(v) => {
                    stack.push(v);
                    metrics.assign(1);
                }
                None => {
                    // retreat: u has no usable arc left in this phase
                    stack.pop();
                    if let Some(&parent) = stack.last() {
                        self.current_edge[parent] += 1;
                        metrics.assign(1);
                    }
                    metrics.compare(1);
                }
            }
        }
        metrics.compare(1);

        Flow::zero()
    }

    // first arc at or after the current arc of u that stays in the level graph
    fn advance(&mut self, u: usize, metrics: &mut Metrics) -> Option<usize> {
        let neighbors = self.csr.neighbors(u);
        while self.current_edge[u] < neighbors.len() {
            metrics.compare(1);
            let v = neighbors[self.current_edge[u]];
            metrics.assign(1);

            metrics.compare(1);
            if self.level[v] == self.level[u] + 1 {
                metrics.compare(1);
                if self.residual.residual_at(u, v) > Flow::zero() {
                    return Some(v);
                }
            }

            self.current_edge[u] += 1;
            metrics.assign(1);
        }
        metrics.compare(1);

        None
    }

    fn push_along(&mut self, path: &[usize], metrics: &mut Metrics) -> Flow {
        let mut delta = Flow::max_value();
        metrics.assign(1);
        for arc in path.windows(2) {
            delta = delta.min(self.residual.residual_at(arc[0], arc[1]));
            metrics.compare(1);
            metrics.assign(1);
        }

        for arc in path.windows(2) {
            self.residual.push_flow(arc[0], arc[1], delta);
            metrics.assign(2);
        }

        debug!("augmenting path {:?} carries {:?}", path, delta);
        delta
    }
}

impl<Flow> MaxFlowSolver<Flow> for Dinic<Flow>
where
    Flow: NumAssign + Ord + Copy + Bounded + Debug,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dinic
    }

    fn solve(&mut self, source: usize, sink: usize) -> Result<MaxFlowResult<Flow>, MaxFlowError> {
        Dinic::solve(self, source, sink)
    }

    fn residual(&self) -> &ResidualMatrix<Flow> {
        &self.residual
    }
}
