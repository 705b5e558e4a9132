use crate::maximum_flow::dinic::Dinic;
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::error::MaxFlowError;
use crate::maximum_flow::ford_fulkerson::FordFulkerson;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::metrics::MaxFlowResult;
use crate::maximum_flow::residual::ResidualMatrix;
use num_traits::{Bounded, NumAssign};
use std::fmt::{self, Debug};

/// A maximum flow algorithm bound to its own snapshot of a graph's capacities.
pub trait MaxFlowSolver<Flow> {
    fn algorithm(&self) -> Algorithm;

    /// Pushes as much flow as the current residual network allows from `source` to `sink`.
    ///
    /// The returned counters cover this call only. A second call on the same solver starts from
    /// the saturated residual network and reports a flow of zero.
    fn solve(&mut self, source: usize, sink: usize) -> Result<MaxFlowResult<Flow>, MaxFlowError>;

    fn residual(&self) -> &ResidualMatrix<Flow>;
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Algorithm {
    EdmondsKarp,
    FordFulkerson,
    Dinic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::EdmondsKarp, Algorithm::FordFulkerson, Algorithm::Dinic];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::EdmondsKarp => "Edmonds-Karp",
            Algorithm::FordFulkerson => "Ford-Fulkerson",
            Algorithm::Dinic => "Dinic",
        }
    }

    // every call snapshots the graph, so solvers built from one graph never share state
    pub fn build<Flow>(self, graph: &Graph<Flow>) -> Box<dyn MaxFlowSolver<Flow>>
    where
        Flow: NumAssign + Ord + Copy + Bounded + Debug + 'static,
    {
        match self {
            Algorithm::EdmondsKarp => Box::new(EdmondsKarp::new(graph)),
            Algorithm::FordFulkerson => Box::new(FordFulkerson::new(graph)),
            Algorithm::Dinic => Box::new(Dinic::new(graph)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::maximum_flow::generator::{fixed_graph, random_graph};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use rstest::*;

    fn diamond() -> Graph<i64> {
        let mut graph = Graph::new(4);
        graph.add_directed_edge(0, 1, 3);
        graph.add_directed_edge(0, 2, 2);
        graph.add_directed_edge(1, 3, 2);
        graph.add_directed_edge(2, 3, 3);
        graph
    }

    fn disconnected() -> Graph<i64> {
        let mut graph = Graph::new(5);
        graph.add_directed_edge(0, 1, 10);
        graph.add_directed_edge(1, 2, 10);
        graph.add_directed_edge(4, 3, 10);
        graph.add_directed_edge(3, 2, 10);
        graph
    }

    // flow conservation and capacity bounds read off the final residual network
    fn assert_valid_flow<Flow>(residual: &ResidualMatrix<Flow>, source: usize, sink: usize, expected: Flow)
    where
        Flow: NumAssign + Ord + Copy + Debug,
    {
        let n = residual.num_nodes();
        for u in 0..n {
            for v in 0..n {
                let (residual_uv, residual_vu) = (residual.residual_capacity(u, v).unwrap(), residual.residual_capacity(v, u).unwrap());
                let (capacity_uv, capacity_vu) = (residual.capacity(u, v).unwrap(), residual.capacity(v, u).unwrap());
                let flow = residual.flow(u, v).unwrap();

                assert!(residual_uv >= Flow::zero());
                assert!(flow >= Flow::zero() && flow <= capacity_uv);
                assert_eq!(residual_uv + residual_vu, capacity_uv + capacity_vu);
            }
            if u != source && u != sink {
                assert_eq!(residual.outflow(u), residual.inflow(u), "conservation violated at {}", u);
            }
        }
        assert_eq!(residual.outflow(source), residual.inflow(source).map(|into| into + expected));
        assert_eq!(residual.inflow(sink), residual.outflow(sink).map(|out| out + expected));

        // no augmenting path is left
        assert!(!residual.minimum_cut(source).unwrap().contains(&sink));
    }

    #[rstest]
    #[case(diamond(), 0, 3, 4)]
    #[case(disconnected(), 0, 4, 0)]
    #[case(fixed_graph(), 0, 9, 676)]
    fn known_flows(#[case] graph: Graph<i64>, #[case] source: usize, #[case] sink: usize, #[case] expected: i64) {
        for algorithm in Algorithm::ALL {
            let mut solver = algorithm.build(&graph);
            assert_eq!(solver.algorithm(), algorithm);

            let result = solver.solve(source, sink).unwrap();
            assert_eq!(result.flow(), expected, "{}", algorithm);
            assert_valid_flow(solver.residual(), source, sink, expected);
        }
    }

    #[rstest]
    fn minimum_cut_capacity_equals_flow() {
        let graph = fixed_graph();
        let mut solver = Algorithm::Dinic.build(&graph);
        let flow = solver.solve(0, 9).unwrap().flow();

        let cut = solver.residual().minimum_cut(0).unwrap();
        let capacity: i64 = graph.edges().filter(|(u, v, _)| cut.contains(u) && !cut.contains(v)).map(|(_, _, c)| c).sum();
        assert_eq!(capacity, flow);
    }

    #[rstest]
    fn uniform_rejection() {
        let graph = diamond();
        for algorithm in Algorithm::ALL {
            let mut solver = algorithm.build(&graph);
            assert_eq!(solver.solve(0, 4), Err(MaxFlowError::SinkOutOfRange { node: 4, num_nodes: 4 }));
            assert_eq!(solver.solve(9, 3), Err(MaxFlowError::SourceOutOfRange { node: 9, num_nodes: 4 }));
            assert_eq!(solver.solve(3, 3), Err(MaxFlowError::SourceEqualsSink(3)));
            assert_eq!(solver.solve(0, 3).unwrap().flow(), 4);
        }
    }

    #[rstest]
    #[case(10, 12, 1)]
    #[case(20, 24, 2)]
    #[case(40, 48, 3)]
    #[case(80, 56, 4)]
    #[case(10, 100, 5)]
    #[case(20, 400, 6)]
    #[case(40, 1600, 7)]
    fn algorithms_agree_on_random_graphs(#[case] num_nodes: usize, #[case] num_edges: usize, #[case] seed: u64) {
        let mut rng = Pcg64::seed_from_u64(seed);
        for _ in 0..5 {
            let graph = random_graph(&mut rng, num_nodes, num_edges);
            let (source, sink) = (0, num_nodes - 1);

            let flows: Vec<i64> = Algorithm::ALL
                .iter()
                .map(|algorithm| {
                    let mut solver = algorithm.build(&graph);
                    let flow = solver.solve(source, sink).unwrap().flow();
                    assert_valid_flow(solver.residual(), source, sink, flow);
                    flow
                })
                .collect();

            assert!(flows[0] > 0);
            assert!(flows.iter().all(|&flow| flow == flows[0]), "{:?}", flows);
        }
    }

    #[rstest]
    #[case(fixed_graph(), 0, 9)]
    #[case(diamond(), 0, 3)]
    fn fresh_solvers_repeat_counts(#[case] graph: Graph<i64>, #[case] source: usize, #[case] sink: usize) {
        for algorithm in Algorithm::ALL {
            let first = algorithm.build(&graph).solve(source, sink).unwrap();
            let second = algorithm.build(&graph).solve(source, sink).unwrap();
            assert_eq!(first, second, "{}", algorithm);
        }

        // both breadth-first solvers share the scan order and the counting points
        let edmonds_karp = Algorithm::EdmondsKarp.build(&graph).solve(source, sink).unwrap();
        let ford_fulkerson = Algorithm::FordFulkerson.build(&graph).solve(source, sink).unwrap();
        assert_eq!(edmonds_karp, ford_fulkerson);
    }

    #[test]
    fn unsigned_flows_balance() {
        // 1 <-> 2 are antiparallel and 3 is fed from both sides
        let mut graph: Graph<u32> = Graph::new(5);
        for (from, to, capacity) in [(0, 1, 8), (0, 2, 4), (1, 2, 5), (2, 1, 3), (1, 3, 4), (2, 3, 6), (3, 4, 9), (1, 4, 2)] {
            graph.add_directed_edge(from, to, capacity);
        }

        for algorithm in Algorithm::ALL {
            let mut solver = algorithm.build(&graph);
            let flow = solver.solve(0, 4).unwrap().flow();
            assert_eq!(flow, 11, "{}", algorithm);
            assert_valid_flow(solver.residual(), 0, 4, flow);
            assert_eq!(solver.residual().inflow(4), Some(11));
            assert_eq!(solver.residual().outflow(4), Some(0));
        }
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = Algorithm::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["Edmonds-Karp", "Ford-Fulkerson", "Dinic"]);
    }
}
