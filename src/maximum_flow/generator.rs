use crate::maximum_flow::graph::Graph;
use rand::Rng;

pub const MIN_CAPACITY: i64 = 20;
pub const MAX_CAPACITY: i64 = 700;

/// Random graph in which `num_nodes - 1` is always reachable from `0`.
///
/// A chain `0 -> 1 -> ... -> num_nodes - 1` is laid down first, then `num_edges - (num_nodes - 1)`
/// further edges between distinct random endpoints. Later edges overwrite earlier ones on the same
/// pair. Capacities are uniform in `MIN_CAPACITY..=MAX_CAPACITY`.
pub fn random_graph<R: Rng + ?Sized>(rng: &mut R, num_nodes: usize, num_edges: usize) -> Graph<i64> {
    let mut graph = Graph::new(num_nodes);
    // no chain and no edge without a self-loop
    if num_nodes < 2 {
        return graph;
    }

    for u in 0..num_nodes - 1 {
        graph.add_directed_edge(u, u + 1, rng.random_range(MIN_CAPACITY..=MAX_CAPACITY));
    }

    for _ in 0..num_edges.saturating_sub(num_nodes - 1) {
        let from = rng.random_range(0..num_nodes);
        let mut to = rng.random_range(0..num_nodes);
        let capacity = rng.random_range(MIN_CAPACITY..=MAX_CAPACITY);
        while from == to {
            to = rng.random_range(0..num_nodes);
        }
        graph.add_directed_edge(from, to, capacity);
    }

    graph
}

const FIXED_EDGES: [(usize, usize, i64); 12] = [
    (0, 2, 544),
    (0, 8, 610),
    (0, 9, 173),
    (1, 2, 160),
    (1, 4, 397),
    (1, 8, 440),
    (2, 9, 503),
    (3, 7, 632),
    (6, 5, 43),
    (7, 1, 186),
    (7, 2, 182),
    (8, 1, 322),
];

/// The 10-node reference graph; its maximum flow from `0` to `9` is 676.
pub fn fixed_graph() -> Graph<i64> {
    let mut graph = Graph::new(10);
    for (from, to, capacity) in FIXED_EDGES {
        graph.add_directed_edge(from, to, capacity);
    }
    graph
}
