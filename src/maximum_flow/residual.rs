use crate::maximum_flow::error::MaxFlowError;
use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;
use std::collections::VecDeque;

/// Solver-owned residual capacities, a private copy of the graph's capacity matrix.
///
/// Pushing `delta` units along `u -> v` decrements `residual(u, v)` and increments `residual(v, u)`,
/// so `residual(u, v) + residual(v, u)` stays equal to the original `capacity(u, v) + capacity(v, u)`.
///
/// The public accessors return `None` for nodes outside the matrix.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ResidualMatrix<Flow> {
    num_nodes: usize,
    original: Vec<Flow>,
    residual: Vec<Flow>,
}

impl<Flow> ResidualMatrix<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn from_graph(graph: &Graph<Flow>) -> Self {
        Self { num_nodes: graph.num_nodes(), original: graph.capacities.clone(), residual: graph.capacities.clone() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    fn contains(&self, u: usize) -> bool {
        u < self.num_nodes
    }

    pub fn residual_capacity(&self, from: usize, to: usize) -> Option<Flow> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        Some(self.residual_at(from, to))
    }

    pub fn capacity(&self, from: usize, to: usize) -> Option<Flow> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        Some(self.original[from * self.num_nodes + to])
    }

    // unchecked, for solvers that validated their endpoints
    #[inline]
    pub(crate) fn residual_at(&self, from: usize, to: usize) -> Flow {
        self.residual[from * self.num_nodes + to]
    }

    #[inline]
    pub(crate) fn push_flow(&mut self, from: usize, to: usize, delta: Flow) {
        self.residual[from * self.num_nodes + to] -= delta;
        self.residual[to * self.num_nodes + from] += delta;
    }

    /// Flow routed along `from -> to`, with flow on antiparallel edges cancelled out.
    ///
    /// Always within `0..=capacity(from, to)`.
    pub fn flow(&self, from: usize, to: usize) -> Option<Flow> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        Some(self.flow_unchecked(from, to))
    }

    /// Total flow leaving `u`.
    ///
    /// Compare with [`inflow`](Self::inflow): the two are equal at every node but the source and
    /// the sink. No difference is taken here, so unsigned flow types never underflow.
    pub fn outflow(&self, u: usize) -> Option<Flow> {
        if !self.contains(u) {
            return None;
        }
        Some((0..self.num_nodes).fold(Flow::zero(), |mut sum, v| {
            sum += self.flow_unchecked(u, v);
            sum
        }))
    }

    // total flow entering u
    pub fn inflow(&self, u: usize) -> Option<Flow> {
        if !self.contains(u) {
            return None;
        }
        Some((0..self.num_nodes).fold(Flow::zero(), |mut sum, v| {
            sum += self.flow_unchecked(v, u);
            sum
        }))
    }

    fn flow_unchecked(&self, from: usize, to: usize) -> Flow {
        let (capacity, residual) = (self.original[from * self.num_nodes + to], self.residual_at(from, to));
        if capacity > residual {
            capacity - residual
        } else {
            Flow::zero()
        }
    }

    // nodes reachable from source through edges with positive residual capacity
    pub fn minimum_cut(&self, source: usize) -> Result<Vec<usize>, MaxFlowError> {
        if !self.contains(source) {
            return Err(MaxFlowError::SourceOutOfRange { node: source, num_nodes: self.num_nodes });
        }

        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for v in 0..self.num_nodes {
                if !visited[v] && self.residual_at(u, v) > Flow::zero() {
                    visited[v] = true;
                    que.push_back(v);
                }
            }
        }

        cut.sort_unstable();
        Ok(cut)
    }
}
