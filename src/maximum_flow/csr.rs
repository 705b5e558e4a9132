use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;

// Arcs traversable in the residual network: u -> v and v -> u for every edge u -> v.
// Built once; only the residual capacities behind the arcs change afterwards.
#[derive(Default, Debug, Clone)]
pub struct CSR {
    pub num_nodes: usize,
    pub start: Vec<usize>,
    pub heads: Vec<usize>,
}

impl CSR {
    pub fn build<Flow>(graph: &Graph<Flow>) -> Self
    where
        Flow: NumAssign + Ord + Copy,
    {
        let num_nodes = graph.num_nodes();

        let mut degree = vec![0; num_nodes];
        for (from, to, _) in graph.edges() {
            degree[from] += 1;
            degree[to] += 1;
        }

        let mut start = vec![0; num_nodes + 1];
        for i in 1..=num_nodes {
            start[i] += start[i - 1] + degree[i - 1];
        }

        // row-major scan keeps each node's arcs in the order the matrix is read
        let mut heads = vec![usize::MAX; start[num_nodes]];
        let mut counter = vec![0; num_nodes];
        for (from, to, _) in graph.edges() {
            heads[start[from] + counter[from]] = to;
            counter[from] += 1;
            heads[start[to] + counter[to]] = from;
            counter[to] += 1;
        }

        Self { num_nodes, start, heads }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.heads[self.start[u]..self.start[u + 1]]
    }
}
