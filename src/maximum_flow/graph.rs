use num_traits::NumAssign;
use std::fmt;

/// Sparse/dense classification of a directed graph by its edge count.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Density {
    Dense,
    Sparse,
}

impl Density {
    // dense when more than half of the n(n-1) possible directed edges are requested
    pub fn classify(num_nodes: usize, num_edges: usize) -> Self {
        let max_edges = num_nodes * num_nodes.saturating_sub(1);
        if num_edges > max_edges / 2 {
            Density::Dense
        } else {
            Density::Sparse
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Density::Dense => write!(f, "dense"),
            Density::Sparse => write!(f, "sparse"),
        }
    }
}

/// Directed graph stored as a dense capacity matrix.
///
/// `capacity(u, v) == 0` means there is no edge from `u` to `v`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct Graph<Flow> {
    num_nodes: usize,
    // row-major, num_nodes * num_nodes
    pub(crate) capacities: Vec<Flow>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, capacities: vec![Flow::zero(); num_nodes * num_nodes] }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    // number of node pairs with a positive capacity
    pub fn num_edges(&self) -> usize {
        self.capacities.iter().filter(|&&c| c > Flow::zero()).count()
    }

    /// Sets the capacity of the edge `from -> to`, overwriting any previous value.
    ///
    /// Returns the previous capacity, or `None` if either endpoint is not a node of the graph.
    /// Capacities are expected to be non-negative; this is not checked.
    pub fn add_directed_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Option<Flow> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return None;
        }

        let index = from * self.num_nodes + to;
        Some(std::mem::replace(&mut self.capacities[index], capacity))
    }

    pub fn capacity(&self, from: usize, to: usize) -> Option<Flow> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return None;
        }
        Some(self.capacities[from * self.num_nodes + to])
    }

    /// Capacities of every edge leaving `from`, indexed by head node.
    pub fn row(&self, from: usize) -> Option<&[Flow]> {
        if from >= self.num_nodes {
            return None;
        }
        Some(&self.capacities[from * self.num_nodes..(from + 1) * self.num_nodes])
    }

    // (from, to, capacity) for every positive capacity, in row-major order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Flow)> + '_ {
        self.capacities
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > Flow::zero())
            .map(move |(i, &c)| (i / self.num_nodes, i % self.num_nodes, c))
    }

    pub fn density(&self) -> Density {
        Density::classify(self.num_nodes, self.num_edges())
    }
}
