pub mod error;
pub mod fixtures;
pub mod graph;
pub mod matrix;
pub mod pickup;
pub mod routing;
mod stopwatch;
pub mod types;

pub use error::GraphError;
pub use graph::{Graph, GraphEdge};
pub use matrix::{
    all_pairs_distances,
    floyd_warshall::FloydWarshall,
    matrix::DistanceMatrix,
    matrix_algorithm::{MatrixAlgorithm, MatrixAlgorithmKind, MatrixAlgorithmResult},
    repeated_dijkstra::RepeatedDijkstra,
};
pub use pickup::best_pickup::{Pickup, best_pickup};
pub use routing::{
    dijkstra::{Dijkstra, shortest_distances},
    distances::Distances,
};
pub use types::{EdgeId, NodeId, Weight};
