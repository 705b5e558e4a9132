mod augmenting_path;
mod csr;
pub mod dinic;
pub mod edmonds_karp;
pub mod error;
pub mod ford_fulkerson;
pub mod generator;
pub mod graph;
pub mod metrics;
pub mod residual;
pub mod solver;

pub use dinic::Dinic;
pub use edmonds_karp::EdmondsKarp;
pub use error::MaxFlowError;
pub use ford_fulkerson::FordFulkerson;
pub use graph::{Density, Graph};
pub use metrics::{MaxFlowResult, Metrics};
pub use residual::ResidualMatrix;
pub use solver::{Algorithm, MaxFlowSolver};
