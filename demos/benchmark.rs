use maxflow_metrics::maximum_flow::generator::{fixed_graph, random_graph};
use maxflow_metrics::maximum_flow::{Algorithm, Density, Graph, MaxFlowError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

// (nodes, edges)
const CASES: [(usize, usize); 7] = [(20, 24), (40, 48), (80, 56), (10, 100), (20, 400), (40, 1600), (80, 6400)];

fn main() -> Result<(), MaxFlowError> {
    env_logger::init();

    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok()).unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("------------ fixed graph ------------");
    let graph = fixed_graph();
    run_all(&graph, 12)?;

    println!("------------ random graphs (seed {}) ------------", seed);
    for (num_nodes, num_edges) in CASES {
        let graph = random_graph(&mut rng, num_nodes, num_edges);
        run_all(&graph, num_edges)?;
    }

    Ok(())
}

fn run_all(graph: &Graph<i64>, num_edges: usize) -> Result<(), MaxFlowError> {
    let (source, sink) = (0, graph.num_nodes() - 1);
    let density = Density::classify(graph.num_nodes(), num_edges);

    for algorithm in Algorithm::ALL {
        // each solver gets its own snapshot of the capacities
        let mut solver = algorithm.build(graph);

        let start = Instant::now();
        let result = solver.solve(source, sink)?;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;

        println!("{} ({} nodes, {} edges) - maximum flow: {}", algorithm, graph.num_nodes(), num_edges, result.flow());
        println!("time: {:.3} ms", elapsed);
        println!("assignments: {}", result.assignments());
        println!("comparisons: {}", result.comparisons());
        println!("graph: {}", density);
        println!("-------------------------------------");
    }

    Ok(())
}
