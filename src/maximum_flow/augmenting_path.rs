use crate::maximum_flow::metrics::Metrics;
use crate::maximum_flow::residual::ResidualMatrix;
use log::{debug, log_enabled, Level};
use num_traits::{Bounded, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;

// Augments along shortest (fewest edges) residual paths until the sink becomes unreachable.
// Nodes are scanned in increasing index order, so a given residual state always produces
// the same sequence of paths and the same counts.
pub(crate) fn augment_shortest_paths<Flow>(residual: &mut ResidualMatrix<Flow>, source: usize, sink: usize, metrics: &mut Metrics) -> Flow
where
    Flow: NumAssign + Ord + Copy + Bounded + Debug,
{
    let n = residual.num_nodes();
    let mut prev = vec![usize::MAX; n];
    let mut visited = vec![false; n];
    let mut que = VecDeque::with_capacity(n);
    metrics.assign(2);

    let mut flow = Flow::zero();
    metrics.assign(1);
    loop {
        let (found, search) = bfs(residual, source, sink, &mut prev, &mut visited, &mut que);
        *metrics += search;
        metrics.compare(1);
        if !found {
            break;
        }

        // calculate delta
        let mut delta = Flow::max_value();
        metrics.assign(1);
        let mut v = sink;
        while v != source {
            metrics.compare(1);
            let u = prev[v];
            delta = delta.min(residual.residual_at(u, v));
            metrics.assign(2);
            v = u;
        }
        metrics.compare(1);

        // update flow
        let mut v = sink;
        while v != source {
            metrics.compare(1);
            let u = prev[v];
            residual.push_flow(u, v, delta);
            metrics.assign(3);
            v = u;
        }
        metrics.compare(1);

        flow += delta;
        metrics.assign(1);

        if log_enabled!(Level::Debug) {
            debug!("augmenting path {:?} carries {:?}", path_to(&prev, source, sink), delta);
        }
    }

    flow
}

// breadth-first search over the residual matrix, stopping as soon as the sink is labelled;
// returns whether the sink was reached and the work the search took
fn bfs<Flow>(residual: &ResidualMatrix<Flow>, source: usize, sink: usize, prev: &mut [usize], visited: &mut [bool], que: &mut VecDeque<usize>) -> (bool, Metrics)
where
    Flow: NumAssign + Ord + Copy,
{
    let mut metrics = Metrics::default();
    visited.fill(false);
    que.clear();
    que.push_back(source);
    visited[source] = true;
    prev[source] = usize::MAX;
    metrics.assign(4);

    while let Some(u) = que.pop_front() {
        metrics.compare(1);
        metrics.assign(1);

        for v in 0..residual.num_nodes() {
            metrics.compare(2);
            if visited[v] {
                continue;
            }
            metrics.compare(1);
            if residual.residual_at(u, v) <= Flow::zero() {
                continue;
            }

            prev[v] = u;
            metrics.assign(1);

            metrics.compare(1);
            if v == sink {
                return (true, metrics);
            }

            que.push_back(v);
            visited[v] = true;
            metrics.assign(2);
        }
        metrics.compare(1);
    }
    metrics.compare(1);

    (false, metrics)
}

fn path_to(prev: &[usize], source: usize, sink: usize) -> Vec<usize> {
    let mut path = vec![sink];
    let mut v = sink;
    while v != source {
        v = prev[v];
        path.push(v);
    }
    path.reverse();
    path
}
